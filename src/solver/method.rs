use super::*;
use crate::game::*;
use crate::*;

/// Which best-response search a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    /// Exhaustive up to [`AUTO_EXACT_WIDTH`] battlefields, greedy beyond.
    #[default]
    Auto,
    /// Enumerate every allocation. At most [`EXACT_WIDTH`] battlefields.
    Exact,
    /// Rank battlefields by opponent marginals.
    Greedy,
}

impl Method {
    /// The concrete search this method runs on `game`.
    pub fn resolve(&self, game: &Game) -> Self {
        match self {
            Self::Auto if game.n() <= AUTO_EXACT_WIDTH => Self::Exact,
            Self::Auto => Self::Greedy,
            other => *other,
        }
    }
}

impl<B: Bits> Oracle<B> for Method {
    fn check(&self, game: &Game) -> Result<()> {
        match self.resolve(game) {
            Self::Exact => Oracle::<B>::check(&Exhaustive, game),
            _ => Oracle::<B>::check(&Greedy, game),
        }
    }
    fn respond(&self, game: &Game, side: Side, opponent: &Mixed<B>) -> Response<B> {
        match self.resolve(game) {
            Self::Exact => Exhaustive.respond(game, side, opponent),
            _ => Greedy.respond(game, side, opponent),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Exact => write!(f, "exact"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}
