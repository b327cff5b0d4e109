//! Unit tests for the delimited snapshot format

use chrono::NaiveDate;
use liquidity_lens::store::{parse_date, parse_value, read_snapshot, snapshot_to_csv};

#[test]
fn test_parse_value_strips_thousands_separators() {
    assert_eq!(parse_value("3,250,000"), Some(3_250_000.0));
    assert_eq!(parse_value(" 5.33 "), Some(5.33));
}

#[test]
fn test_parse_value_coerces_garbage_to_missing() {
    assert_eq!(parse_value("."), None);
    assert_eq!(parse_value(""), None);
    assert_eq!(parse_value("n/a"), None);
    assert_eq!(parse_value("NaN"), None);
    assert_eq!(parse_value("inf"), None);
}

#[test]
fn test_parse_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 2);
    assert_eq!(parse_date("2024-01-02"), expected);
    assert_eq!(parse_date("2024-01-02 00:00:00"), expected);
    assert_eq!(parse_date("01/02/2024"), expected);
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn test_read_snapshot_with_pandas_style_index_header() {
    let csv = ",Fed_Funds_Rate,TED_Spread,Excess_Reserves\n\
               2024-01-03,5.33,.,\"3,250,000\"\n\
               2024-01-02,5.33,0.25,\"3,200,000\"\n";
    let snapshot = read_snapshot(csv.as_bytes()).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.column_names(),
        vec!["Fed_Funds_Rate", "TED_Spread", "Excess_Reserves"]
    );
    assert_eq!(snapshot.dates()[0], NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(snapshot.column("TED_Spread").unwrap(), &[Some(0.25), None]);
    assert_eq!(snapshot.latest("Excess_Reserves"), Some(3_250_000.0));
}

#[test]
fn test_read_snapshot_skips_bad_dates_and_short_rows() {
    let csv = "date,DFF,DGS10\nnot-a-date,1.0,2.0\n2024-01-02,5.33\n";
    let snapshot = read_snapshot(csv.as_bytes()).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.latest("DFF"), Some(5.33));
    assert_eq!(snapshot.latest("DGS10"), None);
}

#[test]
fn test_read_empty_input() {
    let snapshot = read_snapshot("".as_bytes()).unwrap();
    assert!(snapshot.is_empty());

    let header_only = read_snapshot("date,DFF\n".as_bytes()).unwrap();
    assert!(header_only.is_empty());
    assert_eq!(header_only.column_names(), vec!["DFF"]);
}

#[test]
fn test_export_preserves_content() {
    let csv = "date,DFF,DGS10\n2024-01-02,5.33,\n2024-01-03,5.31,4.02\n";
    let snapshot = read_snapshot(csv.as_bytes()).unwrap();
    let exported = snapshot_to_csv(&snapshot).unwrap();

    assert_eq!(String::from_utf8(exported.clone()).unwrap(), csv);
    assert_eq!(read_snapshot(exported.as_slice()).unwrap(), snapshot);
}

#[test]
fn test_invalid_utf8_cell_is_missing() {
    let mut csv = b"date,DFF,DGS10\n2024-01-02,5.33,4.00\n2024-01-03,5.31,".to_vec();
    csv.extend_from_slice(&[0xA0, b'4', b'\n']);
    let snapshot = read_snapshot(csv.as_slice()).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.latest("DFF"), Some(5.31));
    assert_eq!(snapshot.column("DGS10").unwrap(), &[Some(4.00), None]);
}

#[test]
fn test_export_keeps_pandas_index_header() {
    let csv = ",Fed_Funds_Rate,TED_Spread\n2024-01-02,5.33,0.25\n";
    let snapshot = read_snapshot(csv.as_bytes()).unwrap();
    assert_eq!(snapshot.index_name(), "");

    let exported = String::from_utf8(snapshot_to_csv(&snapshot).unwrap()).unwrap();
    assert_eq!(exported, csv);
}
