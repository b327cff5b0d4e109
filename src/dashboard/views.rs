//! View models built from a snapshot

use chrono::NaiveDate;
use serde::Serialize;

use crate::indicators::WindowSet;
use crate::models::metric::{DisplayUnit, Metric};
use crate::models::signal::{CrossoverSignal, PositionSignal};
use crate::models::indicators::MovingAverageTable;
use crate::models::snapshot::Snapshot;
use crate::signals::MovingAverageEngine;

/// Headline metric with its change since the previous row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub column: &'static str,
    pub label: &'static str,
    pub unit: DisplayUnit,
    pub value: Option<f64>,
    pub change: Option<f64>,
}

impl MetricCard {
    pub fn formatted_value(&self) -> String {
        self.value
            .map(|v| self.unit.format(v))
            .unwrap_or_else(|| "n/a".to_string())
    }

    pub fn formatted_change(&self) -> String {
        self.change
            .map(|v| self.unit.format(v))
            .unwrap_or_else(|| "n/a".to_string())
    }
}

pub fn metric_card(snapshot: &Snapshot, metric: Metric) -> MetricCard {
    let unit = metric.unit();
    let value = snapshot.latest(metric.column());
    let change = value
        .zip(snapshot.previous(metric.column()))
        .map(|(latest, previous)| latest - previous);

    MetricCard {
        column: metric.column(),
        label: metric.label(),
        unit,
        value: value.map(|v| unit.convert(v)),
        change: change.map(|v| unit.convert(v)),
    }
}

pub fn metric_cards(snapshot: &Snapshot) -> Vec<MetricCard> {
    Metric::HEADLINE
        .iter()
        .map(|&metric| metric_card(snapshot, metric))
        .collect()
}

/// A column with its moving-average overlays and signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub column: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DisplayUnit>,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Option<f64>>,
    pub moving_averages: MovingAverageTable,
    pub positions: Vec<PositionSignal>,
    pub crossovers: Vec<CrossoverSignal>,
}

/// Build the chart view for `column`, or `None` if the snapshot lacks it.
///
/// Known metrics are converted to their display unit before averaging.
pub fn series_view(snapshot: &Snapshot, column: &str, windows: &WindowSet) -> Option<SeriesView> {
    let raw = snapshot.column(column)?;
    let metric = Metric::from_column(column);
    let values = match metric {
        Some(metric) => metric.unit().apply(raw),
        None => raw.to_vec(),
    };

    let report = MovingAverageEngine::new(windows.clone()).evaluate(&values);

    Some(SeriesView {
        column: column.to_string(),
        label: metric.map_or_else(|| column.to_string(), |m| m.label().to_string()),
        unit: metric.map(Metric::unit),
        dates: snapshot.dates().to_vec(),
        values,
        moving_averages: report.moving_averages,
        positions: report.positions,
        crossovers: report.crossovers,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldPoint {
    pub series_id: &'static str,
    pub maturity_years: f64,
    pub yield_pct: f64,
}

/// Treasury yields on the latest date, shortest maturity first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldCurve {
    pub date: NaiveDate,
    pub points: Vec<YieldPoint>,
}

/// `None` when the snapshot is empty; missing maturities are left out.
pub fn yield_curve(snapshot: &Snapshot) -> Option<YieldCurve> {
    let date = snapshot.latest_date()?;
    let points = Metric::TREASURIES
        .iter()
        .filter_map(|&metric| {
            Some(YieldPoint {
                series_id: metric.series_id(),
                maturity_years: metric.maturity_years()?,
                yield_pct: snapshot.latest(metric.column())?,
            })
        })
        .collect();

    Some(YieldCurve { date, points })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// Tabular view of the most recent rows, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRows {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
}

pub fn recent_rows(snapshot: &Snapshot, limit: usize) -> RecentRows {
    let tail = snapshot.tail(limit);
    let rows = tail
        .dates()
        .iter()
        .enumerate()
        .map(|(i, &date)| RowView {
            date,
            values: tail.columns().iter().map(|c| c.values[i]).collect(),
        })
        .collect();

    RecentRows {
        columns: tail.column_names().into_iter().map(str::to_string).collect(),
        rows,
    }
}
