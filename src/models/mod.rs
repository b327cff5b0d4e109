//! Shared data models spanning the store, engine and dashboard layers.

pub mod indicators;
pub mod metric;
pub mod signal;
pub mod snapshot;

pub use indicators::{MovingAverageLine, MovingAverageTable};
pub use metric::{DisplayUnit, Metric, Observation};
pub use signal::{CrossoverSignal, MovingAverageReport, Position, PositionSignal};
pub use snapshot::{Column, Snapshot, SnapshotError};
