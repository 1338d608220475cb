use crate::*;
use std::time::Duration;

/// One completed fictitious-play iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 1-based iteration index.
    pub iteration: usize,
    /// max(0, attacker − payoff, payoff − defender).
    pub epsilon: Utility,
    /// Payoff of the two mixtures before this iteration's update.
    pub payoff: Utility,
    /// Attacker best-response value against the defender mixture.
    pub attacker: Utility,
    /// Defender best-response value against the attacker mixture.
    pub defender: Utility,
    /// Wall time of the iteration, when timing is enabled.
    pub duration: Option<Duration>,
}

/// Consumer of the per-iteration trace.
pub trait Sink {
    fn record(&mut self, record: &Record) -> Result<()>;
}

impl Sink for Vec<Record> {
    fn record(&mut self, record: &Record) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<24}{:<24}{:<24}{:<24}",
            format!("iter {}", self.iteration),
            format!("epsilon {:.p$}", self.epsilon, p = TRACE_PRECISION),
            format!("payoff {:.p$}", self.payoff, p = TRACE_PRECISION),
            format!("attacker {:.p$}", self.attacker, p = TRACE_PRECISION),
            format!("defender {:.p$}", self.defender, p = TRACE_PRECISION),
        )
    }
}
