//! Date-indexed table of named metric columns

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("column '{column}' has {found} values but the index has {expected} dates")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("dates must be strictly increasing: {next} follows {previous}")]
    NotIncreasing {
        previous: NaiveDate,
        next: NaiveDate,
    },

    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),

    #[error("row for {date} has {found} values but there are {expected} columns")]
    RowWidth {
        date: NaiveDate,
        expected: usize,
        found: usize,
    },
}

/// Header of the date index column when none was read from a file.
pub const DEFAULT_INDEX_NAME: &str = "date";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Metric values per calendar date. Dates are strictly increasing and every
/// column holds exactly one (possibly missing) value per date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    index_name: String,
    dates: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            dates: Vec::new(),
            columns: Vec::new(),
        }
    }
}

impl Snapshot {
    pub fn new(dates: Vec<NaiveDate>, columns: Vec<Column>) -> Result<Self, SnapshotError> {
        if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SnapshotError::NotIncreasing {
                previous: pair[0],
                next: pair[1],
            });
        }

        for (i, column) in columns.iter().enumerate() {
            if column.values.len() != dates.len() {
                return Err(SnapshotError::LengthMismatch {
                    column: column.name.clone(),
                    expected: dates.len(),
                    found: column.values.len(),
                });
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(SnapshotError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            dates,
            columns,
        })
    }

    /// Rename the date index column, e.g. to the empty header pandas writes.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// Build from unordered rows. Rows are sorted by date; when a date
    /// repeats, the row that came last wins.
    pub fn from_rows(
        column_names: Vec<String>,
        rows: Vec<(NaiveDate, Vec<Option<f64>>)>,
    ) -> Result<Self, SnapshotError> {
        let width = column_names.len();
        if let Some((date, values)) = rows.iter().find(|(_, values)| values.len() != width) {
            return Err(SnapshotError::RowWidth {
                date: *date,
                expected: width,
                found: values.len(),
            });
        }

        let mut rows = rows;
        rows.sort_by_key(|(date, _)| *date);

        let mut deduped: Vec<(NaiveDate, Vec<Option<f64>>)> = Vec::with_capacity(rows.len());
        for row in rows {
            match deduped.last_mut() {
                Some(last) if last.0 == row.0 => *last = row,
                _ => deduped.push(row),
            }
        }

        let dates = deduped.iter().map(|(date, _)| *date).collect();
        let columns = column_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column {
                name,
                values: deduped.iter().map(|(_, values)| values[i]).collect(),
            })
            .collect();

        Self::new(dates, columns)
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Value of `name` in the last row.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.column(name)?.last().copied().flatten()
    }

    /// Value of `name` in the second-to-last row.
    pub fn previous(&self, name: &str) -> Option<f64> {
        let values = self.column(name)?;
        values.len().checked_sub(2).and_then(|i| values[i])
    }

    /// The last `n` rows.
    pub fn tail(&self, n: usize) -> Snapshot {
        let start = self.len().saturating_sub(n);
        Snapshot {
            index_name: self.index_name.clone(),
            dates: self.dates[start..].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: c.values[start..].to_vec(),
                })
                .collect(),
        }
    }

    /// Insert or replace the row for `date`. Columns not yet in the table
    /// are added with missing values for the earlier rows; existing columns
    /// absent from `values` are left missing on a new row and untouched on
    /// a replaced one.
    pub fn upsert_row(&mut self, date: NaiveDate, values: &[(String, Option<f64>)]) {
        for (name, _) in values {
            if self.column(name).is_none() {
                self.columns.push(Column {
                    name: name.clone(),
                    values: vec![None; self.dates.len()],
                });
            }
        }

        let index = match self.dates.binary_search(&date) {
            Ok(index) => index,
            Err(index) => {
                self.dates.insert(index, date);
                for column in &mut self.columns {
                    column.values.insert(index, None);
                }
                index
            }
        };

        for (name, value) in values {
            if let Some(column) = self.columns.iter_mut().find(|c| &c.name == name) {
                column.values[index] = *value;
            }
        }
    }
}
