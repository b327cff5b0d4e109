//! Liquidity Lens: macro liquidity snapshots with moving-average analytics.

pub mod config;
pub mod core;
pub mod dashboard;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod store;
