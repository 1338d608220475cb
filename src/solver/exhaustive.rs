use super::*;
use crate::game::*;
use crate::*;

/// Exact best response by enumerating every allocation of the side's budget.
///
/// Visits all C(N, B) strategies in ascending bit-pattern order and keeps
/// the first strict optimum, so ties resolve toward the numerically smallest
/// pattern. Limited to [`EXACT_WIDTH`] battlefields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhaustive;

impl<B: Bits> Oracle<B> for Exhaustive {
    fn check(&self, game: &Game) -> Result<()> {
        if game.n() > EXACT_WIDTH {
            Err(Error::Overflow {
                n: game.n(),
                limit: EXACT_WIDTH,
                what: "exact best-response oracle",
            })
        } else {
            Ok(())
        }
    }

    /// A game wider than `B` enumerates nothing and gets the empty allocation.
    fn respond(&self, game: &Game, side: Side, opponent: &Mixed<B>) -> Response<B> {
        let ref stakes = Stakes::new(game.field(), side, opponent);
        Subsets::<B>::new(game.n(), game.budget(side))
            .map(|strategy| Response {
                value: stakes.value(&strategy),
                strategy,
            })
            .reduce(|best, next| match side.improves(next.value, best.value) {
                true => next,
                false => best,
            })
            .unwrap_or_else(|| Response {
                value: stakes.value(&Strategy::<B>::empty()),
                strategy: Strategy::empty(),
            })
    }
}
