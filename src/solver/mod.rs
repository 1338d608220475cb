mod exhaustive;
mod fictitious;
mod greedy;
mod interrupt;
mod method;
mod oracle;
mod outcome;
mod progress;
mod record;
mod response;
mod stakes;

pub use exhaustive::*;
pub use fictitious::*;
pub use greedy::*;
pub use interrupt::*;
pub use method::*;
pub use oracle::*;
pub use outcome::*;
pub use progress::*;
pub use record::*;
pub use response::*;
pub use stakes::*;
