//! Application configuration loaded from the environment.
//!
//! Aggregation thresholds are configuration rather than hard-coded law, but
//! the defaults are the exact values the decision mapping was calibrated
//! against; changing them changes every verdict.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Get the current environment (production, sandbox, etc.)
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Cutoffs used by the aggregator when mapping scores to decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationThresholds {
    /// |total_score| at or above this is a strong verdict.
    pub strong_score: i32,
    /// |total_score| at or above this (but below strong) is a mild verdict.
    pub mild_score: i32,
    /// Mean news score strictly above this is Buy, strictly below the
    /// negation is Sell.
    pub news_cutoff: f64,
}

impl Default for AggregationThresholds {
    fn default() -> Self {
        Self {
            strong_score: 4,
            mild_score: 1,
            news_cutoff: 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Path of the flat JSON watchlist file.
    pub watchlist_path: PathBuf,
    /// How long fetched ticker payloads stay cached.
    pub cache_ttl: Duration,
    /// How many of the most recent news items feed the news signal.
    pub news_sample_size: usize,
    /// History window requested from the data provider (Yahoo range syntax).
    pub history_range: String,
    pub thresholds: AggregationThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            watchlist_path: PathBuf::from("my_portfolio.json"),
            cache_ttl: Duration::from_secs(300),
            news_sample_size: 5,
            history_range: "6mo".to_string(),
            thresholds: AggregationThresholds::default(),
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            watchlist_path: env::var("WATCHLIST_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.watchlist_path),
            cache_ttl: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            news_sample_size: env::var("NEWS_SAMPLE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.news_sample_size),
            history_range: env::var("HISTORY_RANGE").unwrap_or(defaults.history_range),
            thresholds: AggregationThresholds::default(),
        }
    }
}
