//! Moving-average engine bound to an explicit window configuration.

use crate::indicators::{moving_averages, WindowSet};
use crate::models::indicators::MovingAverageTable;
use crate::models::signal::{CrossoverSignal, MovingAverageReport, PositionSignal};

use super::{crossover_matrix, position_vs_table};

/// Stateless engine: identical input always yields identical output.
#[derive(Debug, Clone)]
pub struct MovingAverageEngine {
    windows: WindowSet,
}

impl MovingAverageEngine {
    pub fn new(windows: WindowSet) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    pub fn moving_averages(&self, series: &[Option<f64>]) -> MovingAverageTable {
        moving_averages(series, &self.windows)
    }

    pub fn positions(&self, series: &[Option<f64>]) -> Vec<PositionSignal> {
        let table = self.moving_averages(series);
        // the table is built from `series`, so the shapes always agree
        position_vs_table(series, &table).unwrap_or_default()
    }

    pub fn crossovers(&self, series: &[Option<f64>]) -> Vec<CrossoverSignal> {
        crossover_matrix(&self.moving_averages(series))
    }

    /// Moving averages plus both signal families for one series.
    pub fn evaluate(&self, series: &[Option<f64>]) -> MovingAverageReport {
        let moving_averages = self.moving_averages(series);
        let positions = position_vs_table(series, &moving_averages).unwrap_or_default();
        let crossovers = crossover_matrix(&moving_averages);

        MovingAverageReport {
            moving_averages,
            positions,
            crossovers,
        }
    }
}
