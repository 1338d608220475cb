//! The battlefield allocation game.
//!
//! - [`Strategy`]: pure play, one bit per battlefield over a [`Bits`] word
//! - [`Mixed`]: empirical mixture of pure strategies with play counts
//! - [`Field`]: battlefield values and the payoff function
//! - [`Game`]: field plus both sides' unit budgets
//! - [`Scenario`]: a parsed problem instance with optional seed strategies

mod bits;
mod field;
mod game;
mod mixed;
mod play;
mod scenario;
mod side;
mod strategy;
mod subsets;

pub use bits::*;
pub use field::*;
pub use game::*;
pub use mixed::*;
pub use play::*;
pub use scenario::*;
pub use side::*;
pub use strategy::*;
pub use subsets::*;
