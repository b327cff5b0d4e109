//! Liquidity Dashboard server
//!
//! Serves metric cards, moving-average series, the yield curve and a CSV
//! export from the latest snapshot in `DATA_DIR`.

use dotenvy::dotenv;
use liquidity_lens::config::{self, WindowConfig};
use liquidity_lens::core::http::start_server;
use liquidity_lens::logging;
use liquidity_lens::store::SnapshotStore;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::get_port();
    let data_dir = config::get_data_dir();
    let windows = WindowConfig::from_env()?;

    info!(environment = %config::get_environment(), "Starting Liquidity Dashboard");
    info!(data_dir = %data_dir.display(), windows = ?windows.defaults(), "Snapshot source");

    let store = SnapshotStore::new(data_dir);
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, store, windows).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down dashboard...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
