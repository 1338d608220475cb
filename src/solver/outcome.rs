use std::time::Duration;

/// How a fictitious-play run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub requested: usize,
    pub completed: usize,
    /// Total wall time of the run.
    pub elapsed: Duration,
    /// Time spent inside iterations, excluding trace output.
    pub computation: Duration,
}

impl Outcome {
    /// Whether an interrupt stopped the run short of its budget.
    pub fn interrupted(&self) -> bool {
        self.completed < self.requested
    }
    /// Time spent outside iterations, mostly writing the trace.
    pub fn io(&self) -> Duration {
        self.elapsed.saturating_sub(self.computation)
    }
    pub fn timing(&self) -> String {
        format!(
            "fictitious play took {:.2}s ({:.2}s computation, {:.2}s io)",
            self.elapsed.as_secs_f64(),
            self.computation.as_secs_f64(),
            self.io().as_secs_f64(),
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.interrupted() {
            true => write!(
                f,
                "interrupted, did {} out of {} iterations",
                self.completed, self.requested
            ),
            false => write!(f, "finished {} iterations", self.completed),
        }
    }
}
