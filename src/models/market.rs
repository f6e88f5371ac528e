use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One OHLC bar for a single trading session.
///
/// Price series are supplied by the caller already sorted by date and
/// deduplicated; the engine never re-sorts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// Whether the bar satisfies `low <= min(open, close)` and
    /// `high >= max(open, close)` with non-negative prices.
    pub fn is_coherent(&self) -> bool {
        self.low >= 0.0
            && self.low <= self.open.min(self.close)
            && self.high >= self.open.max(self.close)
    }

    /// Typical price `(high + low + close) / 3`, used by CCI.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Company metadata as returned by the data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerInfo {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex_dividend_date: Option<NaiveDate>,
}

impl TickerInfo {
    /// Bare info for a symbol whose metadata lookup failed.
    pub fn bare(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            short_name: None,
            ex_dividend_date: None,
        }
    }
}

/// One historical dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub pay_date: NaiveDate,
    pub amount: f64,
}

/// One news item for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Everything the provider returns for one ticker in one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockData {
    pub info: TickerInfo,
    pub history: Vec<Candle>,
    pub news: Vec<NewsItem>,
    pub dividends: Vec<Dividend>,
}
