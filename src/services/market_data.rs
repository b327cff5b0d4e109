//! Macro data provider interface.

use async_trait::async_trait;

use crate::models::metric::Observation;

#[async_trait]
pub trait MacroDataProvider: Send + Sync {
    /// Most recent numeric observation of a series, or `None` when the
    /// provider has no usable value.
    async fn latest_observation(
        &self,
        series_id: &str,
    ) -> Result<Option<Observation>, Box<dyn std::error::Error + Send + Sync>>;
}
