//! Liquidity Collector
//!
//! Fetches the latest value of every tracked FRED series and appends
//! today's row to the snapshot in `DATA_DIR`. Meant to run once a day.

use chrono::Local;
use dotenvy::dotenv;
use liquidity_lens::config;
use liquidity_lens::jobs::{collect_daily_snapshot, CollectOutcome};
use liquidity_lens::logging;
use liquidity_lens::services::FredClient;
use liquidity_lens::store::SnapshotStore;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let api_key = config::get_fred_api_key().ok_or("FRED_API_KEY must be set for the collector")?;
    let provider = match config::get_fred_base_url() {
        Some(base_url) => FredClient::with_client(base_url, api_key, reqwest::Client::new()),
        None => FredClient::new(api_key),
    };
    let store = SnapshotStore::new(config::get_data_dir());
    let today = Local::now().date_naive();

    info!(date = %today, dir = %store.dir().display(), "Collecting daily liquidity snapshot");

    match collect_daily_snapshot(&provider, &store, today).await? {
        CollectOutcome::Written { path, rows } => {
            info!(path = %path.display(), rows = rows, "Snapshot updated");
        }
        CollectOutcome::Skipped { failed } => {
            warn!(failed = ?failed, "No update performed");
        }
    }

    Ok(())
}
