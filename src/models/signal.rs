//! Qualitative moving-average signals

use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicators::MovingAverageTable;

/// Relative position of one quantity against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Above,
    Below,
    Undefined,
}

impl Position {
    /// `Above` only when strictly greater; a tie counts as `Below`.
    pub fn classify(value: Option<f64>, reference: Option<f64>) -> Self {
        match (value, reference) {
            (Some(value), Some(reference)) if value > reference => Position::Above,
            (Some(_), Some(_)) => Position::Below,
            _ => Position::Undefined,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Position::Above => "above",
            Position::Below => "below",
            Position::Undefined => "undefined",
        };
        f.write_str(text)
    }
}

/// Latest value against one window's latest rolling mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSignal {
    pub window: u32,
    pub value: Option<f64>,
    pub moving_average: Option<f64>,
    pub position: Position,
}

impl PositionSignal {
    pub fn describe(&self) -> String {
        match self.position {
            Position::Undefined => format!("{}-day MA unavailable", self.window),
            position => format!("value is {} {}-day MA", position, self.window),
        }
    }
}

/// Shorter window's latest rolling mean against a longer window's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverSignal {
    pub shorter: u32,
    pub longer: u32,
    pub shorter_ma: Option<f64>,
    pub longer_ma: Option<f64>,
    pub position: Position,
}

impl CrossoverSignal {
    pub fn describe(&self) -> String {
        match self.position {
            Position::Undefined => format!("MA_{} vs MA_{} unavailable", self.shorter, self.longer),
            position => format!("MA_{} is {} MA_{}", self.shorter, position, self.longer),
        }
    }
}

/// Everything the engine derives from one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageReport {
    pub moving_averages: MovingAverageTable,
    pub positions: Vec<PositionSignal>,
    pub crossovers: Vec<CrossoverSignal>,
}
