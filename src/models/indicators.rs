use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

/// Rolling means for a single window, aligned with the source series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageLine {
    pub window: u32,
    pub values: Vec<Option<f64>>,
}

impl MovingAverageLine {
    /// Label used for table columns and chart legends, e.g. `MA_20`.
    pub fn label(&self) -> String {
        format!("MA_{}", self.window)
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }
}

/// One moving-average line per window, ordered by ascending window length.
/// Every line holds exactly `len` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTable")]
pub struct MovingAverageTable {
    len: usize,
    lines: Vec<MovingAverageLine>,
}

#[derive(Deserialize)]
struct UncheckedTable {
    len: usize,
    lines: Vec<MovingAverageLine>,
}

impl TryFrom<UncheckedTable> for MovingAverageTable {
    type Error = IndicatorError;

    fn try_from(raw: UncheckedTable) -> Result<Self, Self::Error> {
        Self::new(raw.len, raw.lines)
    }
}

impl MovingAverageTable {
    /// Fails with `ShapeMismatch` when any line does not cover `len` positions.
    pub fn new(len: usize, lines: Vec<MovingAverageLine>) -> Result<Self, IndicatorError> {
        if let Some(line) = lines.iter().find(|line| line.values.len() != len) {
            return Err(IndicatorError::ShapeMismatch {
                series: len,
                table: line.values.len(),
            });
        }
        Ok(Self::from_aligned(len, lines))
    }

    /// Lines already known to be `len` long.
    pub(crate) fn from_aligned(len: usize, mut lines: Vec<MovingAverageLine>) -> Self {
        lines.sort_by_key(|line| line.window);
        Self { len, lines }
    }

    /// Number of positions each line covers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn lines(&self) -> &[MovingAverageLine] {
        &self.lines
    }

    pub fn windows(&self) -> Vec<u32> {
        self.lines.iter().map(|line| line.window).collect()
    }

    pub fn line(&self, window: u32) -> Option<&MovingAverageLine> {
        self.lines.iter().find(|line| line.window == window)
    }

    /// Rolling mean at the last position for `window`.
    pub fn latest(&self, window: u32) -> Option<f64> {
        self.line(window).and_then(MovingAverageLine::latest)
    }
}
