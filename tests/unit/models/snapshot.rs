//! Unit tests for the snapshot table

use chrono::NaiveDate;
use liquidity_lens::models::{Column, Snapshot, SnapshotError};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn column(name: &str, values: &[Option<f64>]) -> Column {
    Column {
        name: name.to_string(),
        values: values.to_vec(),
    }
}

#[test]
fn test_new_rejects_unordered_dates() {
    let result = Snapshot::new(vec![day(2), day(1)], vec![]);
    assert_eq!(
        result,
        Err(SnapshotError::NotIncreasing {
            previous: day(2),
            next: day(1)
        })
    );
}

#[test]
fn test_new_rejects_short_column() {
    let result = Snapshot::new(vec![day(1), day(2)], vec![column("DFF", &[Some(1.0)])]);
    assert!(matches!(result, Err(SnapshotError::LengthMismatch { found: 1, .. })));
}

#[test]
fn test_new_rejects_duplicate_column() {
    let result = Snapshot::new(
        vec![day(1)],
        vec![column("DFF", &[Some(1.0)]), column("DFF", &[Some(2.0)])],
    );
    assert_eq!(result, Err(SnapshotError::DuplicateColumn("DFF".to_string())));
}

#[test]
fn test_from_rows_sorts_and_keeps_last_duplicate() {
    let snapshot = Snapshot::from_rows(
        vec!["Fed_Funds_Rate".to_string()],
        vec![
            (day(3), vec![Some(5.3)]),
            (day(1), vec![Some(5.1)]),
            (day(3), vec![Some(5.4)]),
        ],
    )
    .unwrap();

    assert_eq!(snapshot.dates(), &[day(1), day(3)]);
    assert_eq!(snapshot.column("Fed_Funds_Rate").unwrap(), &[Some(5.1), Some(5.4)]);
}

#[test]
fn test_from_rows_rejects_ragged_row() {
    let result = Snapshot::from_rows(
        vec!["a".to_string(), "b".to_string()],
        vec![(day(1), vec![Some(1.0)])],
    );
    assert!(matches!(result, Err(SnapshotError::RowWidth { expected: 2, found: 1, .. })));
}

#[test]
fn test_latest_and_previous() {
    let snapshot = Snapshot::new(
        vec![day(1), day(2), day(3)],
        vec![column("DFF", &[Some(5.0), None, Some(5.5)])],
    )
    .unwrap();

    assert_eq!(snapshot.latest("DFF"), Some(5.5));
    assert_eq!(snapshot.previous("DFF"), None);
    assert_eq!(snapshot.latest("missing"), None);
    assert_eq!(snapshot.latest_date(), Some(day(3)));
}

#[test]
fn test_tail() {
    let snapshot = Snapshot::new(
        vec![day(1), day(2), day(3)],
        vec![column("DFF", &[Some(1.0), Some(2.0), Some(3.0)])],
    )
    .unwrap();

    let tail = snapshot.tail(2);
    assert_eq!(tail.dates(), &[day(2), day(3)]);
    assert_eq!(tail.column("DFF").unwrap(), &[Some(2.0), Some(3.0)]);
    assert_eq!(snapshot.tail(10).len(), 3);
}

#[test]
fn test_upsert_appends_new_date_and_column() {
    let mut snapshot = Snapshot::new(vec![day(1)], vec![column("DFF", &[Some(5.0)])]).unwrap();
    snapshot.upsert_row(
        day(2),
        &[
            ("DFF".to_string(), Some(5.1)),
            ("DGS10".to_string(), Some(4.2)),
        ],
    );

    assert_eq!(snapshot.dates(), &[day(1), day(2)]);
    assert_eq!(snapshot.column("DFF").unwrap(), &[Some(5.0), Some(5.1)]);
    assert_eq!(snapshot.column("DGS10").unwrap(), &[None, Some(4.2)]);
}

#[test]
fn test_upsert_replaces_same_date() {
    let mut snapshot = Snapshot::new(
        vec![day(1), day(2)],
        vec![column("DFF", &[Some(5.0), Some(5.1)])],
    )
    .unwrap();
    snapshot.upsert_row(day(2), &[("DFF".to_string(), Some(5.2))]);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.latest("DFF"), Some(5.2));
}

#[test]
fn test_upsert_inserts_earlier_date_in_order() {
    let mut snapshot = Snapshot::new(vec![day(5)], vec![column("DFF", &[Some(5.0)])]).unwrap();
    snapshot.upsert_row(day(2), &[("DFF".to_string(), Some(4.0))]);
    assert_eq!(snapshot.dates(), &[day(2), day(5)]);
    assert_eq!(snapshot.column("DFF").unwrap(), &[Some(4.0), Some(5.0)]);
}
