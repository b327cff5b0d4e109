//! Prints the daily liquidity report for the latest snapshot.

use chrono::Local;
use dotenvy::dotenv;
use liquidity_lens::config::{self, WindowConfig};
use liquidity_lens::dashboard::render_report;
use liquidity_lens::logging;
use liquidity_lens::store::SnapshotStore;
use tracing::warn;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let windows = WindowConfig::from_env()?;
    let store = SnapshotStore::new(config::get_data_dir());

    let loaded = match store.load_latest() {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            warn!(error = %e, "Error loading data");
            None
        }
    };

    let report = render_report(loaded.as_ref(), windows.defaults(), Local::now().date_naive())?;
    print!("{}", report);
    Ok(())
}
