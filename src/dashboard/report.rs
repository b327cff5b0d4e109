//! Plain-text daily liquidity report

use std::fmt::{self, Write};

use chrono::NaiveDate;

use super::views::{metric_cards, series_view, yield_curve};
use crate::indicators::WindowSet;
use crate::models::metric::Metric;
use crate::store::LoadedSnapshot;

pub const NO_DATA_MESSAGE: &str = "Unable to load data. Please ensure a snapshot file exists.";

/// Render the report. `None` or an empty snapshot renders the no-data notice.
pub fn render_report(
    loaded: Option<&LoadedSnapshot>,
    windows: &WindowSet,
    today: NaiveDate,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "=== Daily Liquidity Report ===")?;
    writeln!(out, "Date: {}", today)?;

    let Some(loaded) = loaded.filter(|l| !l.snapshot.is_empty()) else {
        writeln!(out)?;
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(out);
    };
    let snapshot = &loaded.snapshot;

    if let Some(as_of) = snapshot.latest_date() {
        writeln!(out, "Source: {} (as of {})", loaded.file_name(), as_of)?;
    }
    writeln!(out)?;

    for card in metric_cards(snapshot) {
        writeln!(
            out,
            "{}: {} (change {})",
            card.label,
            card.formatted_value(),
            card.formatted_change()
        )?;
    }

    for metric in Metric::HEADLINE {
        let Some(view) = series_view(snapshot, metric.column(), windows) else {
            continue;
        };
        writeln!(out)?;
        writeln!(out, "{} moving averages:", view.label)?;
        for line in view.moving_averages.lines() {
            let value = line
                .latest()
                .map(|v| metric.unit().format(v))
                .unwrap_or_else(|| "n/a".to_string());
            writeln!(out, "  {}: {}", line.label(), value)?;
        }
        for signal in &view.positions {
            writeln!(out, "  - {}", signal.describe())?;
        }
        for signal in &view.crossovers {
            writeln!(out, "  - {}", signal.describe())?;
        }
    }

    if let Some(curve) = yield_curve(snapshot).filter(|c| !c.points.is_empty()) {
        writeln!(out)?;
        writeln!(out, "Treasury Yield Curve ({}):", curve.date)?;
        for point in curve.points {
            writeln!(
                out,
                "  {:>6.2}y  {:.2}%  ({})",
                point.maturity_years, point.yield_pct, point.series_id
            )?;
        }
    }

    Ok(out)
}
