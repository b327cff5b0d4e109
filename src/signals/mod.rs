//! Moving-average signal derivation.

pub mod crossover;
pub mod engine;
pub mod position;

pub use crossover::*;
pub use engine::*;
pub use position::*;
