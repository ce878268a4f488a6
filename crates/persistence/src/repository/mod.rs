//! Repository implementations for database operations

pub mod signals;
pub mod stats;
pub mod trades;

pub use signals::*;
pub use stats::*;
pub use trades::*;
