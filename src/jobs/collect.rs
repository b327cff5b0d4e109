//! Fetch the latest value of every tracked metric and append a dated row

use chrono::NaiveDate;
use tracing::{error, info, warn};

use super::types::{CollectOutcome, FetchedValues};
use crate::models::metric::Metric;
use crate::models::snapshot::Snapshot;
use crate::services::market_data::MacroDataProvider;
use crate::store::{SnapshotStore, StoreError};

/// Fetch each metric once. Failures are logged and recorded, never raised.
pub async fn fetch_latest_values<P>(provider: &P, metrics: &[Metric]) -> FetchedValues
where
    P: MacroDataProvider + ?Sized,
{
    let mut fetched = FetchedValues::default();

    for &metric in metrics {
        match provider.latest_observation(metric.series_id()).await {
            Ok(Some(observation)) => {
                info!(
                    metric = metric.column(),
                    series_id = metric.series_id(),
                    observed = %observation.date,
                    value = observation.value,
                    "Fetched latest observation"
                );
                fetched.values.push((metric, observation.value));
            }
            Ok(None) => {
                warn!(series_id = metric.series_id(), "No observation available");
                fetched.failed.push(metric);
            }
            Err(e) => {
                error!(series_id = metric.series_id(), error = %e, "Failed to fetch series");
                fetched.failed.push(metric);
            }
        }
    }

    fetched
}

/// Append today's row to the latest snapshot and write it as the file for
/// `date`. Any fetch failure means no update is performed.
pub async fn collect_daily_snapshot<P>(
    provider: &P,
    store: &SnapshotStore,
    date: NaiveDate,
) -> Result<CollectOutcome, StoreError>
where
    P: MacroDataProvider + ?Sized,
{
    let fetched = fetch_latest_values(provider, &Metric::ALL).await;
    if !fetched.failed.is_empty() {
        warn!(
            failed = ?fetched.failed,
            "Skipping snapshot update: {} series unavailable",
            fetched.failed.len()
        );
        return Ok(CollectOutcome::Skipped {
            failed: fetched.failed,
        });
    }

    let mut snapshot = match store.load_latest() {
        Ok(loaded) => loaded.snapshot,
        Err(StoreError::NoSnapshot { .. }) => {
            info!(dir = %store.dir().display(), "No previous snapshot, starting a new one");
            Snapshot::default()
        }
        Err(e) => return Err(e),
    };

    let row: Vec<(String, Option<f64>)> = fetched
        .values
        .iter()
        .map(|(metric, value)| (metric.column().to_string(), Some(*value)))
        .collect();
    snapshot.upsert_row(date, &row);

    let path = store.write(&snapshot, date)?;
    Ok(CollectOutcome::Written {
        path,
        rows: snapshot.len(),
    })
}
