//! Delimited snapshot format: a date index column followed by metric columns

use std::io::{Read, Write};

use chrono::NaiveDate;
use tracing::warn;

use super::StoreError;
use crate::models::snapshot::Snapshot;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Best-effort numeric coercion. Thousands separators are stripped;
/// anything else that does not parse to a finite number is missing.
pub fn parse_value(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an index cell. A time component (`2024-01-02 00:00:00`) is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.split(['T', ' ']).next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
}

/// A cell as text, or `None` when it is not valid UTF-8.
fn cell(record: &csv::ByteRecord, i: usize) -> Option<&str> {
    record.get(i).and_then(|bytes| std::str::from_utf8(bytes).ok())
}

/// Read a snapshot. Rows whose date cannot be parsed are skipped; cells that
/// are not valid UTF-8 are missing values.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Snapshot, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.byte_headers()?.clone();
    if headers.is_empty() {
        return Ok(Snapshot::default());
    }
    let index_name = String::from_utf8_lossy(headers.get(0).unwrap_or_default()).into_owned();
    let column_names: Vec<String> = headers
        .iter()
        .skip(1)
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();

    let mut rows = Vec::new();
    for (line, record) in reader.byte_records().enumerate() {
        let record = record?;
        let raw_date = cell(&record, 0).unwrap_or_default();
        let Some(date) = parse_date(raw_date) else {
            warn!(line = line + 2, value = raw_date, "Skipping snapshot row with unparseable date");
            continue;
        };
        let values: Vec<Option<f64>> = (0..column_names.len())
            .map(|i| cell(&record, i + 1).and_then(parse_value))
            .collect();
        rows.push((date, values));
    }

    Ok(Snapshot::from_rows(column_names, rows)?.with_index_name(index_name))
}

/// Write a snapshot in the same delimited format `read_snapshot` accepts.
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, writer: W) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec![snapshot.index_name()];
    header.extend(snapshot.column_names());
    writer.write_record(&header)?;

    for (i, date) in snapshot.dates().iter().enumerate() {
        let mut record = vec![date.format("%Y-%m-%d").to_string()];
        record.extend(
            snapshot
                .columns()
                .iter()
                .map(|c| c.values[i].map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Serialize to bytes for download.
pub fn snapshot_to_csv(snapshot: &Snapshot) -> Result<Vec<u8>, StoreError> {
    let mut buffer = Vec::new();
    write_snapshot(snapshot, &mut buffer)?;
    Ok(buffer)
}
