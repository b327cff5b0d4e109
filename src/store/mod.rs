//! Flat-file snapshot persistence.

pub mod csv_format;
pub mod snapshot;

pub use csv_format::*;
pub use snapshot::*;
