//! SMA (Simple Moving Average) over gappy series

use crate::indicators::{IndicatorError, WindowSet};
use crate::models::indicators::{MovingAverageLine, MovingAverageTable};

/// Trailing unweighted mean for one window.
///
/// Position `i` holds the mean of `series[i + 1 - window..=i]`. It is `None`
/// before the window fills and wherever any observation inside the window
/// is missing.
pub fn rolling_mean(series: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; series.len()];
    }

    (0..series.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let trailing = &series[i + 1 - window..=i];
            let sum = trailing.iter().copied().sum::<Option<f64>>()?;
            Some(sum / window as f64)
        })
        .collect()
}

/// Moving averages for every window in an already validated set.
pub fn moving_averages(series: &[Option<f64>], windows: &WindowSet) -> MovingAverageTable {
    let lines = windows
        .iter()
        .map(|window| MovingAverageLine {
            window,
            values: rolling_mean(series, window as usize),
        })
        .collect();

    MovingAverageTable::from_aligned(series.len(), lines)
}

/// Validate `windows` and compute one aligned moving average per window.
///
/// An empty series yields an empty table; invalid windows yield an error and
/// no partial result.
pub fn compute_moving_averages(
    series: &[Option<f64>],
    windows: &[i64],
) -> Result<MovingAverageTable, IndicatorError> {
    let windows = WindowSet::new(windows)?;
    Ok(moving_averages(series, &windows))
}
