//! Yahoo Finance market data provider implementation.
//!
//! Uses the public v8 chart endpoint for daily bars and dividend events,
//! the v10 quoteSummary endpoint for metadata, and the v1 search endpoint
//! for news. Metadata and news lookups are best-effort: their failure
//! degrades the payload instead of failing the fetch.

use crate::models::market::{Candle, Dividend, NewsItem, StockData, TickerInfo};
use crate::services::market_data::{ProviderError, StockDataProvider};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Clone)]
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (tests use a local mock).
    pub fn with_base_url(base_url: &str) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(ua) =
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .parse()
        {
            headers.insert(reqwest::header::USER_AGENT, ua);
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ProviderError> {
        let fetch = || async {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        };
        let parsed = fetch
            .retry(ExponentialBuilder::default().with_max_times(2))
            .await?;
        Ok(parsed)
    }

    async fn fetch_chart(&self, symbol: &str, range: &str) -> Result<ChartPayload, ProviderError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d&events=div",
            self.base_url, symbol, range
        );
        let response: ChartResponse = self.get_json(&url).await?;

        if let Some(error) = response.chart.error {
            return Err(ProviderError::Api(error.description));
        }
        let result = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| ProviderError::Api(format!("empty chart result for {}", symbol)))?;

        let quote = result
            .indicators
            .quote
            .first()
            .ok_or_else(|| ProviderError::Api(format!("missing quote data for {}", symbol)))?;

        let mut history = Vec::with_capacity(result.timestamp.len());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let bar = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            );
            // Yahoo pads halted sessions with nulls; skip those bars.
            if let (Some(open), Some(high), Some(low), Some(close)) = bar {
                if let Some(date) = date_from_timestamp(*ts) {
                    history.push(Candle::new(date, open, high, low, close));
                }
            }
        }

        let mut dividends: Vec<Dividend> = result
            .events
            .and_then(|e| e.dividends)
            .map(|divs| {
                divs.into_values()
                    .filter_map(|d| {
                        date_from_timestamp(d.date).map(|pay_date| Dividend {
                            pay_date,
                            amount: d.amount,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        dividends.sort_by_key(|d| d.pay_date);

        Ok(ChartPayload {
            history,
            dividends,
        })
    }

    async fn fetch_info(&self, symbol: &str) -> Result<TickerInfo, ProviderError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price,summaryDetail",
            self.base_url, symbol
        );
        let response: QuoteSummaryResponse = self.get_json(&url).await?;
        let result = response
            .quote_summary
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| ProviderError::Api(format!("empty quote summary for {}", symbol)))?;

        Ok(TickerInfo {
            symbol: symbol.to_string(),
            short_name: result.price.and_then(|p| p.short_name),
            ex_dividend_date: result
                .summary_detail
                .and_then(|d| d.ex_dividend_date)
                .and_then(|d| date_from_timestamp(d.raw)),
        })
    }

    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, ProviderError> {
        let url = format!(
            "{}/v1/finance/search?q={}&newsCount=10&quotesCount=0",
            self.base_url, symbol
        );
        let response: SearchResponse = self.get_json(&url).await?;
        Ok(response
            .news
            .into_iter()
            .map(|item| NewsItem {
                title: item.title,
                summary: item.summary,
                publisher: item.publisher,
                link: item.link,
                published_at: item
                    .provider_publish_time
                    .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            })
            .collect())
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockDataProvider for YahooProvider {
    async fn fetch(&self, symbol: &str, range: &str) -> Result<StockData, ProviderError> {
        let chart = self.fetch_chart(symbol, range).await?;

        let info = match self.fetch_info(symbol).await {
            Ok(info) => info,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "quote summary lookup failed, using bare info");
                TickerInfo::bare(symbol)
            }
        };

        let news = match self.fetch_news(symbol).await {
            Ok(news) => news,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "news lookup failed, continuing without news");
                Vec::new()
            }
        };

        Ok(StockData {
            info,
            history: chart.history,
            news,
            dividends: chart.dividends,
        })
    }
}

fn date_from_timestamp(ts: i64) -> Option<chrono::NaiveDate> {
    DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

struct ChartPayload {
    history: Vec<Candle>,
    dividends: Vec<Dividend>,
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
    events: Option<ChartEvents>,
}

#[derive(Deserialize, Debug)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Deserialize, Debug)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
struct ChartEvents {
    dividends: Option<HashMap<String, DividendEvent>>,
}

#[derive(Deserialize, Debug)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Deserialize, Debug)]
struct QuoteSummary {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryResult {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetail>,
}

#[derive(Deserialize, Debug)]
struct PriceModule {
    #[serde(rename = "shortName")]
    short_name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SummaryDetail {
    #[serde(rename = "exDividendDate")]
    ex_dividend_date: Option<RawValue>,
}

#[derive(Deserialize, Debug)]
struct RawValue {
    raw: i64,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<SearchNewsItem>,
}

#[derive(Deserialize, Debug)]
struct SearchNewsItem {
    title: String,
    summary: Option<String>,
    publisher: Option<String>,
    link: Option<String>,
    #[serde(rename = "providerPublishTime")]
    provider_publish_time: Option<i64>,
}
