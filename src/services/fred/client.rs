//! FRED REST client

use async_trait::async_trait;
use tracing::{debug, warn};

use super::messages::ObservationsResponse;
use crate::config::DEFAULT_FRED_BASE_URL;
use crate::models::metric::Observation;
use crate::services::market_data::MacroDataProvider;

/// Observations requested per call; enough to step over recent missing days.
const DEFAULT_LOOKBACK: usize = 10;

pub struct FredClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    lookback: usize,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_FRED_BASE_URL, api_key, reqwest::Client::new())
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            lookback: DEFAULT_LOOKBACK,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback.max(1);
        self
    }

    /// Recent observations, newest first, with missing values dropped.
    pub async fn recent_observations(
        &self,
        series_id: &str,
    ) -> Result<Vec<Observation>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/fred/series/observations", self.base_url);
        let limit = self.lookback.to_string();

        let response: ObservationsResponse = self
            .http
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("sort_order", "desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let total = response.observations.len();
        let mut observations: Vec<Observation> = response
            .observations
            .iter()
            .filter_map(|raw| raw.parse())
            .collect();
        observations.sort_by(|a, b| b.date.cmp(&a.date));

        debug!(
            series_id = series_id,
            received = total,
            usable = observations.len(),
            "FRED observations fetched"
        );
        Ok(observations)
    }
}

#[async_trait]
impl MacroDataProvider for FredClient {
    async fn latest_observation(
        &self,
        series_id: &str,
    ) -> Result<Option<Observation>, Box<dyn std::error::Error + Send + Sync>> {
        let latest = self.recent_observations(series_id).await?.into_iter().next();
        if latest.is_none() {
            warn!(series_id = series_id, "FRED returned no usable observation");
        }
        Ok(latest)
    }
}
