//! Collector job results

use std::path::PathBuf;

use crate::models::metric::Metric;

/// What a collection run did.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectOutcome {
    /// Snapshot written with the new row.
    Written { path: PathBuf, rows: usize },
    /// At least one metric could not be fetched; nothing was written.
    Skipped { failed: Vec<Metric> },
}

/// Latest values gathered for one collection run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedValues {
    pub values: Vec<(Metric, f64)>,
    pub failed: Vec<Metric>,
}
