//! Market data provider interface.
//!
//! A provider returns everything the dashboard needs for one ticker in one
//! call: metadata, price history, news, and dividend history. Failures are
//! per ticker and must never abort evaluation of other tickers.

use crate::models::market::StockData;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    /// The upstream API answered but reported an error or returned an
    /// unusable payload.
    Api(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "http error: {}", e),
            ProviderError::Api(msg) => write!(f, "provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Http(e)
    }
}

#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Fetch info, history, news, and dividends for a symbol.
    async fn fetch(&self, symbol: &str, range: &str) -> Result<StockData, ProviderError>;
}
