//! Fictitious-play equilibrium approximation for attacker/defender
//! battlefield allocation games.
//!
//! An attacker and a defender each commit a fixed number of indivisible
//! units across a shared set of valued battlefields. The attacker scores a
//! battlefield's value whenever it commits there and the defender does not.
//! Both sides repeatedly best-respond to the other's empirical mixture, and
//! the time-averaged mixtures converge toward an equilibrium as the
//! exploitability gap shrinks.
//!
//! - [`game`]: strategies, mixtures, payoffs and scenarios
//! - [`solver`]: best-response oracles and the fictitious-play driver
//! - [`save`]: trace and mixture files
//! - [`runner`]: batch execution over scenario files
pub mod error;
pub mod game;
pub mod runner;
pub mod save;
pub mod solver;

pub use error::*;
pub use solver::Interrupt;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected payoffs, best-response values, and exploitability gaps.
pub type Utility = f64;
/// Mixture probabilities and per-battlefield commitment marginals.
pub type Probability = f64;
/// Battlefield rewards.
pub type Value = u32;
/// Play counts accumulated by a mixed strategy.
pub type Weight = u64;

// ============================================================================
// BIT-VECTOR WIDTHS
// Strategies are stored in the narrowest of u32 / u64 / u128 that fits N.
// ============================================================================
/// Largest battlefield count any scenario may declare.
pub const MAX_WIDTH: usize = 128;
/// Largest battlefield count the exhaustive oracle will enumerate.
pub const EXACT_WIDTH: usize = 32;
/// Battlefield count up to which `Method::Auto` prefers the exhaustive oracle.
pub const AUTO_EXACT_WIDTH: usize = 16;
/// Default cap on the support a uniform initial mixture may enumerate,
/// overridable per run. Beyond it a scenario must supply seed strategies.
pub const UNIFORM_SUPPORT_LIMIT: u128 = 1 << 26;

// ============================================================================
// OUTPUT FORMATS
// ============================================================================
/// Decimal digits for epsilon, payoff, and best-response values in traces.
pub const TRACE_PRECISION: usize = 5;
/// Decimal digits for probabilities in mixture listings.
pub const MIXTURE_PRECISION: usize = 10;
/// Extension of the per-iteration trace written next to each scenario.
pub const TRACE_EXTENSION: &str = "csv";
/// Extension of the attacker's final mixture listing.
pub const ATTACKER_EXTENSION: &str = "attacker";
/// Extension of the defender's final mixture listing.
pub const DEFENDER_EXTENSION: &str = "defender";

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Interval between progress log messages during a run.
pub const PROGRESS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging. Terminal at `level`, and when `dir` is given, a
/// DEBUG-level copy in `dir/<unix-time>.log`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>;
    let mut loggers = vec![term];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = dir.join(format!("{}.log", time));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}

/// Raise `interrupt` on Ctrl+C. The running scenario stops after its
/// current iteration; a second Ctrl+C before it does exits immediately.
/// Must be called from within a tokio runtime.
#[cfg(feature = "cli")]
pub fn sigint(interrupt: Interrupt) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            println!();
            if interrupt.raised() {
                log::warn!("violent interrupt received, exiting immediately");
                std::process::exit(130);
            }
            log::warn!("interrupt received, finishing current iteration...");
            interrupt.raise();
        }
    });
}

/// Raise `interrupt` when "Q" + Enter is typed on stdin.
#[cfg(feature = "cli")]
pub fn brb(interrupt: Interrupt) {
    std::thread::spawn(move || {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().eq_ignore_ascii_case("Q") => {
                    log::warn!("graceful interrupt requested, finishing current iteration...");
                    interrupt.raise();
                }
                Ok(_) => continue,
            }
        }
    });
}
