//! Unit tests for rolling means

use liquidity_lens::indicators::{compute_moving_averages, rolling_mean, IndicatorError};

fn dense(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn test_rolling_means_for_two_windows() {
    let series = dense(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let table = compute_moving_averages(&series, &[2, 3]).unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.windows(), vec![2, 3]);
    assert_eq!(
        table.line(2).unwrap().values,
        vec![None, Some(1.5), Some(2.5), Some(3.5), Some(4.5)]
    );
    assert_eq!(
        table.line(3).unwrap().values,
        vec![None, None, Some(2.0), Some(3.0), Some(4.0)]
    );
}

#[test]
fn test_value_defined_from_full_window_onwards() {
    let series = dense(&[3.0, 7.0, 1.0, 9.0, 4.0, 6.0, 2.0, 8.0]);
    for window in 1..=series.len() + 1 {
        let means = rolling_mean(&series, window);
        assert_eq!(means.len(), series.len());
        for (i, mean) in means.iter().enumerate() {
            if i + 1 < window {
                assert!(mean.is_none(), "window {} position {}", window, i);
            } else {
                let expected = series[i + 1 - window..=i]
                    .iter()
                    .map(|v| v.unwrap())
                    .sum::<f64>()
                    / window as f64;
                assert!((mean.unwrap() - expected).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_missing_value_blanks_every_window_covering_it() {
    let series = vec![Some(1.0), None, Some(3.0)];
    let table = compute_moving_averages(&series, &[2]).unwrap();
    assert_eq!(table.line(2).unwrap().values, vec![None, None, None]);
}

#[test]
fn test_window_recovers_after_gap_leaves_it() {
    let series = vec![Some(1.0), None, Some(3.0), Some(5.0), Some(7.0)];
    assert_eq!(
        rolling_mean(&series, 2),
        vec![None, None, None, Some(4.0), Some(6.0)]
    );
}

#[test]
fn test_empty_series_yields_empty_table() {
    let table = compute_moving_averages(&[], &[5, 20]).unwrap();
    assert!(table.is_empty());
    assert!(table.lines().iter().all(|line| line.values.is_empty()));
}

#[test]
fn test_invalid_windows_are_rejected() {
    let series = dense(&[1.0, 2.0, 3.0]);
    assert_eq!(
        compute_moving_averages(&series, &[0]),
        Err(IndicatorError::NonPositiveWindow(0))
    );
    assert_eq!(
        compute_moving_averages(&series, &[-1]),
        Err(IndicatorError::NonPositiveWindow(-1))
    );
    assert_eq!(
        compute_moving_averages(&series, &[]),
        Err(IndicatorError::EmptyWindowSet)
    );
}

#[test]
fn test_computation_is_idempotent() {
    let series = vec![Some(4.5), Some(4.6), None, Some(4.4), Some(4.3), Some(4.33)];
    let first = compute_moving_averages(&series, &[2, 3]).unwrap();
    let second = compute_moving_averages(&series, &[2, 3]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_window_longer_than_series_is_all_missing() {
    let series = dense(&[1.0, 2.0]);
    assert_eq!(rolling_mean(&series, 5), vec![None, None]);
}
