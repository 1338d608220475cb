use super::*;
use crate::game::*;
use crate::*;

/// Best-response oracle: the pure strategy a side should play against a
/// fixed opponent mixture, and the payoff it earns there.
///
/// The attacker maximizes payoff, the defender minimizes it. Implementations
/// share this one signature so the driver never knows which search it runs.
pub trait Oracle<B: Bits> {
    /// Best pure reply for `side` against `opponent`.
    fn respond(&self, game: &Game, side: Side, opponent: &Mixed<B>) -> Response<B>;

    /// Reject games this oracle cannot search, before any enumeration.
    fn check(&self, _game: &Game) -> Result<()> {
        Ok(())
    }

    fn attacker(&self, game: &Game, defender: &Mixed<B>) -> Response<B> {
        self.respond(game, Side::Attacker, defender)
    }
    fn defender(&self, game: &Game, attacker: &Mixed<B>) -> Response<B> {
        self.respond(game, Side::Defender, attacker)
    }
}
