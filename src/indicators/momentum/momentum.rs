//! Momentum indicator
//!
//! momentum[t] = close[t] - close[t - period]

use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const DEFAULT_PERIOD: usize = 10;

/// Calculate the momentum series aligned with the input candles. The first
/// `period` entries are `None`.
pub fn momentum_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            if i >= period {
                Some(candle.close - candles[i - period].close)
            } else {
                None
            }
        })
        .collect()
}

/// Classify the latest bar: Buy if momentum is strictly positive, otherwise
/// Sell (a flat tape reads as Sell). Momentum never votes Neutral once
/// defined.
pub fn classify(momentum: Option<f64>) -> Signal {
    match momentum {
        Some(v) if v > 0.0 => Signal::Buy,
        Some(_) => Signal::Sell,
        None => Signal::Neutral,
    }
}
