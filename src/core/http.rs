//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::dashboard::Dashboard;
use crate::metrics::Metrics;
use crate::services::watchlist::{AddResult, WatchlistStore};

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub watchlist: Arc<WatchlistStore>,
    pub metrics: Arc<Metrics>,
    pub health: Arc<RwLock<HealthStatus>>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "dividash"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
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

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct AddTickerRequest {
    symbol: String,
}

async fn get_watchlist(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.watchlist.list().await)
}

async fn add_ticker(
    State(state): State<AppState>,
    Json(req): Json<AddTickerRequest>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    match state.watchlist.add(&req.symbol).await {
        Ok(AddResult::Added) => Ok((
            StatusCode::CREATED,
            Json(json!({ "result": "added", "symbol": req.symbol.trim().to_uppercase() })),
        )),
        Ok(AddResult::AlreadyPresent) => Ok((
            StatusCode::OK,
            Json(json!({ "result": "already_present" })),
        )),
        Ok(AddResult::EmptyInput) => Err(StatusCode::BAD_REQUEST),
        Err(e) => {
            error!(error = %e, "failed to persist watchlist");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn clear_watchlist(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match state.watchlist.clear().await {
        Ok(()) => Ok(Json(json!({ "result": "cleared" }))),
        Err(e) => {
            error!(error = %e, "failed to clear watchlist");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn get_signals(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Json<crate::dashboard::TickerOverview> {
    Json(state.dashboard.overview(&symbol.to_uppercase()).await)
}

async fn get_calendar(State(state): State<AppState>) -> Json<Value> {
    let symbols = state.watchlist.list().await;
    let events = state.dashboard.calendar(&symbols).await;
    Json(json!({ "events": events }))
}

async fn get_news(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Json<Value> {
    let news = state.dashboard.news_feed(&symbol.to_uppercase()).await;
    Json(json!({ "news": news }))
}

/// Build the application router with all routes and layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route(
            "/api/v1/watchlist",
            get(get_watchlist).post(add_ticker).delete(clear_watchlist),
        )
        .route("/api/v1/signals/{symbol}", get(get_signals))
        .route("/api/v1/calendar", get(get_calendar))
        .route("/api/v1/news/{symbol}", get(get_news))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            metrics_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Bind and serve until the task is cancelled.
pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
