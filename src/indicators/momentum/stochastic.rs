//! Stochastic %K oscillator
//!
//! %K = (close - min(low, period)) / (max(high, period) - min(low, period)) * 100

use crate::common::math;
use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const DEFAULT_PERIOD: usize = 14;
pub const OVERSOLD: f64 = 20.0;
pub const OVERBOUGHT: f64 = 80.0;

/// Calculate the %K series aligned with the input candles.
///
/// A zero high-low range over the window leaves the entry `None`.
pub fn stochastic_k_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let min_low = math::rolling_min(&lows, period);
    let max_high = math::rolling_max(&highs, period);

    candles
        .iter()
        .zip(min_low.iter().zip(&max_high))
        .map(|(candle, (low, high))| match (low, high) {
            (Some(low), Some(high)) if high - low > 0.0 => {
                Some((candle.close - low) / (high - low) * 100.0)
            }
            _ => None,
        })
        .collect()
}

/// Classify the latest bar: Buy below 20, Sell above 80, else Neutral.
pub fn classify(k: Option<f64>) -> Signal {
    match k {
        Some(v) if v < OVERSOLD => Signal::Buy,
        Some(v) if v > OVERBOUGHT => Signal::Sell,
        _ => Signal::Neutral,
    }
}
