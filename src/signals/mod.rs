//! Signal evaluation interfaces.

pub mod aggregation;
pub mod engine;

pub use aggregation::*;
pub use engine::*;
