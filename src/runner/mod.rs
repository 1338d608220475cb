#[cfg(feature = "cli")]
mod args;
mod batch;

#[cfg(feature = "cli")]
pub use args::*;
pub use batch::*;
