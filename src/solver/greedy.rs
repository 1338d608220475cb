use super::*;
use crate::game::*;
use crate::*;

/// Best response by ranking battlefields independently.
///
/// Each battlefield is scored from the opponent's marginal commitment
/// probability: the attacker by `value · (1 − P(defended))`, the defender by
/// `value · P(attacked)` at risk if left open. The side commits to its top
/// budget battlefields. Ties go to the highest index for the attacker and
/// the lowest index for the defender. Runs in O(N log N + support · N)
/// and handles every width up to [`MAX_WIDTH`].
///
/// The reported value is recomputed with [`Field::u`] against the opponent
/// mixture, not taken from the ranking scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greedy;

impl<B: Bits> Oracle<B> for Greedy {
    fn respond(&self, game: &Game, side: Side, opponent: &Mixed<B>) -> Response<B> {
        let strategy = Stakes::new(game.field(), side, opponent)
            .ranking()
            .into_iter()
            .take(game.budget(side))
            .collect::<Strategy<B>>();
        let value = match side {
            Side::Attacker => game.field().u(&strategy, opponent),
            Side::Defender => game.field().u(opponent, &strategy),
        };
        Response { value, strategy }
    }
}
