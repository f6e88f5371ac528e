//! Dividash server
//!
//! Serves the watchlist, dividend calendar, signal summary, and scored
//! news feed over HTTP.

use dividash::config::{get_environment, Config};
use dividash::core::http::{start_server, AppState, HealthStatus};
use dividash::dashboard::Dashboard;
use dividash::logging;
use dividash::metrics::Metrics;
use dividash::services::sentiment::LlmSentimentScorer;
use dividash::services::watchlist::WatchlistStore;
use dividash::services::yahoo::YahooProvider;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let env = get_environment();
    info!("Starting Dividash server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let metrics = Arc::new(Metrics::new()?);
    let watchlist = Arc::new(WatchlistStore::open(&config.watchlist_path));
    let scorer = LlmSentimentScorer::from_env();
    if std::env::var("OPENAI_API_KEY").is_err() {
        warn!("OPENAI_API_KEY not set, news items will be marked sentiment-unavailable");
    }

    let port = config.port;
    let dashboard = Arc::new(Dashboard::new(
        Arc::new(YahooProvider::new()),
        Arc::new(scorer),
        Some(metrics.clone()),
        config,
    ));

    let state = AppState {
        dashboard,
        watchlist,
        metrics,
        health: Arc::new(RwLock::new(HealthStatus::default())),
        start_time: Arc::new(Instant::now()),
    };

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
