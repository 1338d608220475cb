use crate::game::*;
use crate::*;

/// A best response and the payoff it earns against the opponent's mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response<B: Bits> {
    pub value: Utility,
    pub strategy: Strategy<B>,
}
