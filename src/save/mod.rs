mod mixture;
mod outputs;
mod trace;

pub use mixture::*;
pub use outputs::*;
pub use trace::*;
