//! Presentation models for the dashboard API and the text report.

pub mod report;
pub mod views;

pub use report::*;
pub use views::*;
