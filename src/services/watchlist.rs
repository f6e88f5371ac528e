//! Watchlist persistence: an ordered, duplicate-free list of uppercase
//! ticker symbols stored as a flat JSON array.
//!
//! Loaded once at startup; written back after every add/clear mutation.

use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::warn;

#[derive(Debug)]
pub enum WatchlistError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for WatchlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchlistError::Io(e) => write!(f, "watchlist io error: {}", e),
            WatchlistError::Serde(e) => write!(f, "watchlist serialization error: {}", e),
        }
    }
}

impl std::error::Error for WatchlistError {}

impl From<std::io::Error> for WatchlistError {
    fn from(e: std::io::Error) -> Self {
        WatchlistError::Io(e)
    }
}

impl From<serde_json::Error> for WatchlistError {
    fn from(e: serde_json::Error) -> Self {
        WatchlistError::Serde(e)
    }
}

/// What happened to an `add` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    Added,
    AlreadyPresent,
    EmptyInput,
}

pub struct WatchlistStore {
    path: PathBuf,
    tickers: RwLock<Vec<String>>,
}

impl WatchlistStore {
    /// Open the store, loading whatever list the file holds. A missing or
    /// corrupt file starts an empty list rather than failing startup.
    pub fn open(path: &Path) -> Self {
        let tickers = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt watchlist file, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self {
            path: path.to_path_buf(),
            tickers: RwLock::new(tickers),
        }
    }

    pub async fn list(&self) -> Vec<String> {
        self.tickers.read().await.clone()
    }

    /// Uppercase, deduplicate, append, persist.
    pub async fn add(&self, symbol: &str) -> Result<AddResult, WatchlistError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Ok(AddResult::EmptyInput);
        }

        let mut tickers = self.tickers.write().await;
        if tickers.contains(&symbol) {
            return Ok(AddResult::AlreadyPresent);
        }
        tickers.push(symbol);
        self.persist(&tickers)?;
        Ok(AddResult::Added)
    }

    /// Empty the list and persist.
    pub async fn clear(&self) -> Result<(), WatchlistError> {
        let mut tickers = self.tickers.write().await;
        tickers.clear();
        self.persist(&tickers)?;
        Ok(())
    }

    fn persist(&self, tickers: &[String]) -> Result<(), WatchlistError> {
        let raw = serde_json::to_string_pretty(tickers)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
