//! Core application primitives (HTTP dashboard server)

pub mod http;

pub use http::*;
