//! Latest value against each window's rolling mean

use crate::indicators::{moving_averages, IndicatorError, WindowSet};
use crate::models::indicators::MovingAverageTable;
use crate::models::signal::{Position, PositionSignal};

/// Classify the last observation of `series` against the last rolling mean
/// of every line in `table`.
///
/// Fails only when `table` was not computed over a series of the same length.
pub fn position_vs_table(
    series: &[Option<f64>],
    table: &MovingAverageTable,
) -> Result<Vec<PositionSignal>, IndicatorError> {
    if table.len() != series.len() {
        return Err(IndicatorError::ShapeMismatch {
            series: series.len(),
            table: table.len(),
        });
    }

    let value = series.last().copied().flatten();
    Ok(table
        .lines()
        .iter()
        .map(|line| {
            let moving_average = line.latest();
            PositionSignal {
                window: line.window,
                value,
                moving_average,
                position: Position::classify(value, moving_average),
            }
        })
        .collect())
}

/// One above/below/undefined classification per window.
pub fn latest_position_vs_ma(
    series: &[Option<f64>],
    windows: &[i64],
) -> Result<Vec<PositionSignal>, IndicatorError> {
    let windows = WindowSet::new(windows)?;
    position_vs_table(series, &moving_averages(series, &windows))
}
