//! Tracked macro metrics and their display units

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated observation from a data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Unit a metric is shown in. Conversion happens on display only; the
/// snapshot keeps values as the provider reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    Percent,
    /// Stored in percent, shown in basis points.
    BasisPoints,
    /// Stored in millions of USD, shown in billions.
    Billions,
}

impl DisplayUnit {
    pub fn convert(self, value: f64) -> f64 {
        match self {
            DisplayUnit::Percent => value,
            DisplayUnit::BasisPoints => value * 100.0,
            DisplayUnit::Billions => value / 1_000.0,
        }
    }

    /// Convert a whole column, keeping gaps.
    pub fn apply(self, values: &[Option<f64>]) -> Vec<Option<f64>> {
        values.iter().map(|v| v.map(|v| self.convert(v))).collect()
    }

    pub fn format(self, value: f64) -> String {
        match self {
            DisplayUnit::Percent => format!("{:.2}%", value),
            DisplayUnit::BasisPoints => format!("{:.2} bps", value),
            DisplayUnit::Billions => format!("${:.2}B", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    FedFundsRate,
    TedSpread,
    ExcessReserves,
    Treasury1Mo,
    Treasury3Mo,
    Treasury6Mo,
    Treasury1Y,
    Treasury2Y,
    Treasury5Y,
    Treasury10Y,
    Treasury30Y,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::FedFundsRate,
        Metric::TedSpread,
        Metric::ExcessReserves,
        Metric::Treasury1Mo,
        Metric::Treasury3Mo,
        Metric::Treasury6Mo,
        Metric::Treasury1Y,
        Metric::Treasury2Y,
        Metric::Treasury5Y,
        Metric::Treasury10Y,
        Metric::Treasury30Y,
    ];

    /// Metrics shown as cards and in the daily report.
    pub const HEADLINE: [Metric; 3] = [
        Metric::FedFundsRate,
        Metric::TedSpread,
        Metric::ExcessReserves,
    ];

    /// Treasury curve points, shortest maturity first.
    pub const TREASURIES: [Metric; 8] = [
        Metric::Treasury1Mo,
        Metric::Treasury3Mo,
        Metric::Treasury6Mo,
        Metric::Treasury1Y,
        Metric::Treasury2Y,
        Metric::Treasury5Y,
        Metric::Treasury10Y,
        Metric::Treasury30Y,
    ];

    /// Snapshot column name.
    pub fn column(self) -> &'static str {
        match self {
            Metric::FedFundsRate => "Fed_Funds_Rate",
            Metric::TedSpread => "TED_Spread",
            Metric::ExcessReserves => "Excess_Reserves",
            treasury => treasury.series_id(),
        }
    }

    /// FRED series id.
    pub fn series_id(self) -> &'static str {
        match self {
            Metric::FedFundsRate => "DFF",
            Metric::TedSpread => "TEDRATE",
            Metric::ExcessReserves => "EXCSRESNS",
            Metric::Treasury1Mo => "DGS1MO",
            Metric::Treasury3Mo => "DGS3MO",
            Metric::Treasury6Mo => "DGS6MO",
            Metric::Treasury1Y => "DGS1",
            Metric::Treasury2Y => "DGS2",
            Metric::Treasury5Y => "DGS5",
            Metric::Treasury10Y => "DGS10",
            Metric::Treasury30Y => "DGS30",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::FedFundsRate => "Fed Funds Rate",
            Metric::TedSpread => "TED Spread",
            Metric::ExcessReserves => "Excess Reserves",
            Metric::Treasury1Mo => "1-Month Treasury",
            Metric::Treasury3Mo => "3-Month Treasury",
            Metric::Treasury6Mo => "6-Month Treasury",
            Metric::Treasury1Y => "1-Year Treasury",
            Metric::Treasury2Y => "2-Year Treasury",
            Metric::Treasury5Y => "5-Year Treasury",
            Metric::Treasury10Y => "10-Year Treasury",
            Metric::Treasury30Y => "30-Year Treasury",
        }
    }

    pub fn unit(self) -> DisplayUnit {
        match self {
            Metric::TedSpread => DisplayUnit::BasisPoints,
            Metric::ExcessReserves => DisplayUnit::Billions,
            _ => DisplayUnit::Percent,
        }
    }

    /// Maturity in years for treasury metrics.
    pub fn maturity_years(self) -> Option<f64> {
        match self {
            Metric::Treasury1Mo => Some(1.0 / 12.0),
            Metric::Treasury3Mo => Some(0.25),
            Metric::Treasury6Mo => Some(0.5),
            Metric::Treasury1Y => Some(1.0),
            Metric::Treasury2Y => Some(2.0),
            Metric::Treasury5Y => Some(5.0),
            Metric::Treasury10Y => Some(10.0),
            Metric::Treasury30Y => Some(30.0),
            _ => None,
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.column() == column)
    }
}
