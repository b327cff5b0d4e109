//! FRED (Federal Reserve Economic Data) provider

pub mod client;
pub mod messages;

pub use client::FredClient;
pub use messages::{FredObservation, ObservationsResponse};
