use crate::*;

/// The two players. The attacker maximizes payoff, the defender minimizes it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    /// Whether `candidate` is strictly better than `incumbent` for this side.
    pub fn improves(&self, candidate: Utility, incumbent: Utility) -> bool {
        match self {
            Self::Attacker => candidate > incumbent,
            Self::Defender => candidate < incumbent,
        }
    }
    /// Flip a payoff so that larger is better for this side.
    pub fn orient(&self, utility: Utility) -> Utility {
        match self {
            Self::Attacker => utility,
            Self::Defender => -utility,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attacker => write!(f, "attacker"),
            Self::Defender => write!(f, "defender"),
        }
    }
}
