//! Daily fetch-and-append job.

pub mod collect;
pub mod types;

pub use collect::*;
pub use types::*;
