use super::*;
use crate::*;
use std::time::Duration;
use std::time::Instant;

/// Wall-clock bookkeeping for one run.
///
/// Splits elapsed time into computation (inside iterations) and everything
/// else, and rate-limits progress lines to one per [`PROGRESS_LOG_INTERVAL`].
pub struct Progress {
    requested: usize,
    completed: usize,
    computation: Duration,
    start: Instant,
    prior: Instant,
}

impl Progress {
    pub fn new(requested: usize) -> Self {
        let now = Instant::now();
        Self {
            requested,
            completed: 0,
            computation: Duration::ZERO,
            start: now,
            prior: now,
        }
    }

    /// Account for one finished iteration.
    pub fn tick(&mut self, computation: Duration) {
        self.completed += 1;
        self.computation += computation;
    }

    pub fn percent(&self) -> f64 {
        100. * self.completed as f64 / self.requested.max(1) as f64
    }

    /// Progress line, only if the log interval has elapsed since the last one.
    pub fn checkpoint(&mut self, record: &Record) -> Option<String> {
        if self.prior.elapsed() >= PROGRESS_LOG_INTERVAL {
            self.prior = Instant::now();
            let rate = self.completed as f64 / self.start.elapsed().as_secs_f64().max(1e-9);
            Some(format!(
                "{:<12}{:<24}{:<24}{:<20}",
                format!("{:.1}%", self.percent()),
                format!("epsilon {:.p$}", record.epsilon, p = TRACE_PRECISION),
                format!("payoff {:.p$}", record.payoff, p = TRACE_PRECISION),
                format!("it/sec {:.1}", rate),
            ))
        } else {
            None
        }
    }

    pub fn finish(self) -> Outcome {
        Outcome {
            requested: self.requested,
            completed: self.completed,
            elapsed: self.start.elapsed(),
            computation: self.computation,
        }
    }
}
