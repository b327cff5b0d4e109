//! HTTP dashboard server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::config::{parse_window_list, WindowConfig};
use crate::dashboard::{metric_cards, recent_rows, series_view, yield_curve};
use crate::metrics::Metrics;
use crate::store::{snapshot_to_csv, LoadedSnapshot, SnapshotStore, StoreError};

pub const DEFAULT_RECENT_ROWS: usize = 10;
pub const EXPORT_FILE_NAME: &str = "liquidity_data.csv";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub store: Arc<SnapshotStore>,
    pub windows: Arc<WindowConfig>,
}

impl AppState {
    pub fn new(store: SnapshotStore, windows: WindowConfig, metrics: Arc<Metrics>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            store: Arc::new(store),
            windows: Arc::new(windows),
        }
    }
}

/// Errors surfaced to dashboard clients.
#[derive(Debug)]
pub enum ApiError {
    /// No snapshot, an unreadable one, or an empty one. Not fatal.
    NoData(String),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::NoData(m) => (StatusCode::SERVICE_UNAVAILABLE, "no_data", m),
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "invalid_request", m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, "error", m),
        };
        (status, Json(json!({ "status": kind, "message": message }))).into_response()
    }
}

/// Load the latest snapshot for one request. Every failure degrades to
/// `NoData` so the dashboard keeps serving.
fn load_snapshot(state: &AppState) -> Result<LoadedSnapshot, ApiError> {
    let loaded = match state.store.load_latest() {
        Ok(loaded) => loaded,
        Err(e) => {
            state.metrics.snapshot_load_failures_total.inc();
            match &e {
                StoreError::NoSnapshot { .. } => info!(error = %e, "No snapshot available"),
                _ => warn!(error = %e, "Failed to load snapshot"),
            }
            return Err(ApiError::NoData(format!("Error loading data: {}", e)));
        }
    };

    state.metrics.snapshot_rows.set(loaded.snapshot.len() as f64);
    if loaded.snapshot.is_empty() {
        state.metrics.snapshot_load_failures_total.inc();
        return Err(ApiError::NoData(format!(
            "Snapshot {} contains no rows",
            loaded.file_name()
        )));
    }
    Ok(loaded)
}

/// Liveness only. Missing data is reported by the data routes, not here.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "liquidity-dashboard"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Headline metric cards.
async fn summary(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let loaded = load_snapshot(&state)?;
    Ok(Json(json!({
        "source": loaded.file_name(),
        "as_of": loaded.snapshot.latest_date(),
        "rows": loaded.snapshot.len(),
        "metrics": metric_cards(&loaded.snapshot),
    })))
}

#[derive(Debug, Deserialize)]
struct DataQuery {
    rows: Option<usize>,
}

/// Most recent rows of the loaded table.
async fn recent_data(
    State(state): State<AppState>,
    Query(params): Query<DataQuery>,
) -> Result<Json<Value>, ApiError> {
    let loaded = load_snapshot(&state)?;
    let limit = params.rows.unwrap_or(DEFAULT_RECENT_ROWS);
    Ok(Json(json!(recent_rows(&loaded.snapshot, limit))))
}

#[derive(Debug, Deserialize)]
struct SeriesQuery {
    /// Comma-separated window lengths, e.g. `20,50`.
    windows: Option<String>,
}

/// One column with its moving averages and signals.
async fn series(
    State(state): State<AppState>,
    Path(column): Path<String>,
    Query(params): Query<SeriesQuery>,
) -> Result<Json<Value>, ApiError> {
    let requested = params
        .windows
        .as_deref()
        .map(parse_window_list)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let windows = state
        .windows
        .select(requested.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let loaded = load_snapshot(&state)?;
    let view = series_view(&loaded.snapshot, &column, &windows)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown column '{}'", column)))?;

    Ok(Json(json!(view)))
}

async fn yield_curve_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let loaded = load_snapshot(&state)?;
    let curve = yield_curve(&loaded.snapshot)
        .ok_or_else(|| ApiError::NoData("Snapshot contains no rows".to_string()))?;
    Ok(Json(json!(curve)))
}

/// Available and default moving-average windows.
async fn window_options(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "menu": state.windows.menu(),
        "defaults": state.windows.defaults(),
    }))
}

/// Download the loaded table as CSV.
async fn export(State(state): State<AppState>) -> Result<Response, ApiError> {
    let loaded = load_snapshot(&state)?;
    let body = snapshot_to_csv(&loaded.snapshot).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/summary", get(summary))
        .route("/api/data", get(recent_data))
        .route("/api/windows", get(window_options))
        .route("/api/series/{column}", get(series))
        .route("/api/yield-curve", get(yield_curve_handler))
        .route("/api/export", get(export))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    store: SnapshotStore,
    windows: WindowConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(store, windows, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
