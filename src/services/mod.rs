//! Upstream data providers.

pub mod fred;
pub mod market_data;

pub use fred::FredClient;
pub use market_data::MacroDataProvider;
