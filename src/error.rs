use thiserror::Error;

/// Failures that abort a single scenario.
///
/// Interrupts are not errors: a cancelled run is an ordinary
/// [`Outcome`](crate::solver::Outcome) with fewer completed iterations.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing, non-numeric, or out-of-range tokens in a scenario description.
    #[error("malformed scenario: {0}")]
    Malformed(String),

    /// A seed strategy commits a different number of units than its side's budget.
    #[error("seed strategy {strategy} commits {found} units, expected {expected}")]
    InvalidSeed {
        strategy: String,
        expected: usize,
        found: usize,
    },

    /// More battlefields than a bit vector (or an oracle) can address.
    #[error("{n} battlefields exceed the {limit}-battlefield limit of the {what}")]
    Overflow {
        n: usize,
        limit: usize,
        what: &'static str,
    },

    /// The uniform initial mixture would enumerate too many strategies.
    #[error(
        "uniform mixture over {budget} of {n} battlefields exceeds {limit} strategies; supply seed strategies"
    )]
    Intractable {
        n: usize,
        budget: usize,
        limit: u128,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
