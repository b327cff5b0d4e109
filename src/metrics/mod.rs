//! Prometheus metrics for the dashboard server.

use prometheus::{Counter, Encoder, Gauge, Histogram, HistogramOpts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: Counter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: Gauge,
    /// Rows in the most recently loaded snapshot.
    pub snapshot_rows: Gauge,
    pub snapshot_load_failures_total: Counter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            Counter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = Gauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        )?;
        let snapshot_rows = Gauge::new("snapshot_rows", "Rows in the last loaded snapshot")?;
        let snapshot_load_failures_total = Counter::new(
            "snapshot_load_failures_total",
            "Snapshot loads that found no usable data",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(snapshot_rows.clone()))?;
        registry.register(Box::new(snapshot_load_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            snapshot_rows,
            snapshot_load_failures_total,
        })
    }

    /// Render every registered metric in the text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
