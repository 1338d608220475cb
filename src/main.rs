//! Solve each scenario file given on the command line.
//!
//! Writes `<name>.csv`, `<name>.attacker` and `<name>.defender` next to every
//! scenario. Ctrl+C or "Q" + Enter stops the running scenario early and
//! moves on to the next one.

use blotto::runner::Args;
use blotto::*;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    log(args.level(), args.logs.as_deref())?;
    let interrupt = Interrupt::default();
    sigint(interrupt.clone());
    brb(interrupt.clone());
    let batch = args.batch(interrupt);
    let scenarios = args.scenarios;
    let failed = tokio::task::spawn_blocking(move || batch.run(&scenarios)).await?;
    match failed {
        0 => Ok(ExitCode::SUCCESS),
        n => {
            log::error!("{} scenario(s) failed", n);
            Ok(ExitCode::FAILURE)
        }
    }
}
