//! Per-ticker orchestration: fetch, evaluate, score, aggregate.
//!
//! Every collaborator failure is recovered at the boundary of its
//! originating call. A ticker with failed data yields an overview with no
//! signal instead of aborting the rest of the dashboard.

use crate::cache::TtlCache;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::models::market::{NewsItem, StockData};
use crate::models::signal::{CompositeSignal, SentimentOutcome, SignalReport};
use crate::services::calendar::{dividend_events, CalendarEvent};
use crate::services::market_data::{ProviderError, StockDataProvider};
use crate::services::sentiment::{score_items, SentimentScorer};
use crate::signals::aggregation::aggregate;
use crate::signals::engine::{EngineError, SignalEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Why an overview does or does not carry a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverviewStatus {
    Ready,
    InsufficientData,
    DataUnavailable,
}

/// One news item joined with its scoring outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredNews {
    pub item: NewsItem,
    pub outcome: SentimentOutcome,
}

/// Everything the dashboard shows for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerOverview {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: OverviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SignalReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeSignal>,
    pub news: Vec<ScoredNews>,
    pub events: Vec<CalendarEvent>,
}

impl TickerOverview {
    fn unavailable(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: None,
            status: OverviewStatus::DataUnavailable,
            report: None,
            composite: None,
            news: Vec::new(),
            events: Vec::new(),
        }
    }
}

pub struct Dashboard {
    provider: Arc<dyn StockDataProvider>,
    scorer: Arc<dyn SentimentScorer>,
    cache: TtlCache<StockData>,
    metrics: Option<Arc<Metrics>>,
    config: Config,
}

impl Dashboard {
    pub fn new(
        provider: Arc<dyn StockDataProvider>,
        scorer: Arc<dyn SentimentScorer>,
        metrics: Option<Arc<Metrics>>,
        config: Config,
    ) -> Self {
        Self {
            provider,
            scorer,
            cache: TtlCache::new(config.cache_ttl),
            metrics,
            config,
        }
    }

    /// Fetch a ticker's payload through the cache. Key is ticker plus the
    /// requested history window.
    async fn stock_data(&self, symbol: &str) -> Result<StockData, ProviderError> {
        let key = format!("{}:{}", symbol, self.config.history_range);
        if let Some(data) = self.cache.get(&key).await {
            debug!(symbol = %symbol, "cache hit");
            return Ok(data);
        }

        if let Some(m) = &self.metrics {
            m.provider_fetches_total.inc();
        }
        match self.provider.fetch(symbol, &self.config.history_range).await {
            Ok(data) => {
                self.cache.put(&key, data.clone()).await;
                Ok(data)
            }
            Err(e) => {
                if let Some(m) = &self.metrics {
                    m.provider_fetch_failures_total.inc();
                }
                Err(e)
            }
        }
    }

    /// Evaluate one ticker end to end.
    pub async fn overview(&self, symbol: &str) -> TickerOverview {
        let data = match self.stock_data(symbol).await {
            Ok(data) => data,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "data fetch failed, no signal available");
                return TickerOverview::unavailable(symbol);
            }
        };

        let events = dividend_events(&data.info, &data.dividends);
        let outcomes = score_items(
            self.scorer.as_ref(),
            &data.news,
            self.config.news_sample_size,
        )
        .await;
        let news = data
            .news
            .iter()
            .take(self.config.news_sample_size)
            .cloned()
            .zip(outcomes.iter().cloned())
            .map(|(item, outcome)| ScoredNews { item, outcome })
            .collect();

        if let Some(m) = &self.metrics {
            m.signal_evaluations_total.inc();
        }
        let (status, report, composite) = match SignalEngine::evaluate(&data.history) {
            Ok(report) => {
                let composite = aggregate(
                    &report.signals,
                    &outcomes,
                    &self.config.thresholds,
                    self.config.news_sample_size,
                );
                (OverviewStatus::Ready, Some(report), Some(composite))
            }
            Err(e @ EngineError::InsufficientData { .. }) => {
                debug!(symbol = %symbol, error = %e, "engine declined to compute");
                (OverviewStatus::InsufficientData, None, None)
            }
        };

        TickerOverview {
            symbol: symbol.to_string(),
            name: data.info.short_name.clone(),
            status,
            report,
            composite,
            news,
            events,
        }
    }

    /// Evaluate every ticker independently; one failure never aborts the
    /// rest.
    pub async fn overview_all(&self, symbols: &[String]) -> Vec<TickerOverview> {
        let mut overviews = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            overviews.push(self.overview(symbol).await);
        }
        overviews
    }

    /// Combined dividend calendar across the watchlist, sorted by date.
    pub async fn calendar(&self, symbols: &[String]) -> Vec<CalendarEvent> {
        let mut events = Vec::new();
        for symbol in symbols {
            match self.stock_data(symbol).await {
                Ok(data) => events.extend(dividend_events(&data.info, &data.dividends)),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "skipping ticker in calendar");
                }
            }
        }
        events.sort_by_key(|e| e.start);
        events
    }

    /// Scored news feed for one ticker.
    pub async fn news_feed(&self, symbol: &str) -> Vec<ScoredNews> {
        match self.stock_data(symbol).await {
            Ok(data) => {
                let outcomes = score_items(
                    self.scorer.as_ref(),
                    &data.news,
                    self.config.news_sample_size,
                )
                .await;
                data.news
                    .into_iter()
                    .take(self.config.news_sample_size)
                    .zip(outcomes)
                    .map(|(item, outcome)| ScoredNews { item, outcome })
                    .collect()
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "news fetch failed");
                Vec::new()
            }
        }
    }
}
