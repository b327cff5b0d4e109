//! Unit tests for window-set validation

use liquidity_lens::indicators::{IndicatorError, WindowSet};

#[test]
fn test_windows_are_sorted_ascending() {
    let windows = WindowSet::new(&[200, 20, 50]).unwrap();
    assert_eq!(windows.as_slice(), &[20, 50, 200]);
    assert_eq!(windows.len(), 3);
}

#[test]
fn test_duplicate_window_rejected() {
    assert_eq!(
        WindowSet::new(&[20, 50, 20]),
        Err(IndicatorError::DuplicateWindow(20))
    );
}

#[test]
fn test_non_positive_window_rejected() {
    assert_eq!(
        WindowSet::new(&[20, -5]),
        Err(IndicatorError::NonPositiveWindow(-5))
    );
}

#[test]
fn test_oversized_window_rejected() {
    let too_large = i64::from(u32::MAX) + 1;
    assert_eq!(
        WindowSet::new(&[too_large]),
        Err(IndicatorError::WindowTooLarge(too_large))
    );
}

#[test]
fn test_try_from_slice() {
    let raw: &[i64] = &[10, 5];
    let windows = WindowSet::try_from(raw).unwrap();
    assert_eq!(windows.iter().collect::<Vec<_>>(), vec![5, 10]);
}
