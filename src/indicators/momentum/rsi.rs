//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss, both under Wilder's smoothing
//! (`alpha = 1 / period`, seeded with the first delta).

use crate::common::math;
use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const DEFAULT_PERIOD: usize = 14;
pub const OVERSOLD: f64 = 30.0;
pub const OVERBOUGHT: f64 = 70.0;

/// Calculate the RSI series aligned with the input candles.
///
/// The first bar has no delta and is `None`. Bars where both smoothed
/// averages are zero (a flat tape) carry no signal and are also `None`;
/// a zero average loss with positive gains pins RSI at 100.
pub fn rsi_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if candles.len() < 2 || period == 0 {
        return out;
    }

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);
    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let alpha = 1.0 / period as f64;
    let avg_gain = math::smoothed_series(&gains, alpha);
    let avg_loss = math::smoothed_series(&losses, alpha);

    for (i, (gain, loss)) in avg_gain.iter().zip(&avg_loss).enumerate() {
        out[i + 1] = if *loss == 0.0 {
            if *gain == 0.0 {
                None
            } else {
                Some(100.0)
            }
        } else {
            let rs = gain / loss;
            Some(100.0 - 100.0 / (1.0 + rs))
        };
    }
    out
}

/// Classify the latest bar: Buy below 30 (oversold), Sell above 70
/// (overbought), otherwise Neutral.
pub fn classify(rsi: Option<f64>) -> Signal {
    match rsi {
        Some(v) if v < OVERSOLD => Signal::Buy,
        Some(v) if v > OVERBOUGHT => Signal::Sell,
        _ => Signal::Neutral,
    }
}
