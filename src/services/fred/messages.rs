//! FRED REST payloads

use serde::{Deserialize, Serialize};

use crate::models::metric::Observation;
use crate::store::{parse_date, parse_value};

/// Body of `GET /fred/series/observations?file_type=json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub observations: Vec<FredObservation>,
}

/// FRED sends values as strings and marks missing days with `"."`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FredObservation {
    pub date: String,
    pub value: String,
}

impl FredObservation {
    pub fn parse(&self) -> Option<Observation> {
        Some(Observation {
            date: parse_date(&self.date)?,
            value: parse_value(&self.value)?,
        })
    }
}
