use super::*;
use crate::solver::*;
use crate::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scenario files, solved in order
    #[arg(required = true)]
    pub scenarios: Vec<PathBuf>,
    /// Best-response search
    #[arg(long, value_enum, default_value_t = Method::Auto)]
    pub method: Method,
    /// Add a per-iteration duration column (microseconds) to traces
    #[arg(long)]
    pub timing: bool,
    /// Largest uniform starting mixture, in strategies
    #[arg(long, default_value_t = UNIFORM_SUPPORT_LIMIT as u64)]
    pub max_support: u64,
    /// Log setup details at DEBUG
    #[arg(long, short)]
    pub verbose: bool,
    /// Also write a DEBUG log file into this directory
    #[arg(long)]
    pub logs: Option<PathBuf>,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }
    pub fn batch(&self, interrupt: Interrupt) -> Batch {
        Batch::new(self.method, self.timing, interrupt).limited(u128::from(self.max_support))
    }
}
