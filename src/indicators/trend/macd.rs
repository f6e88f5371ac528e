//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(12) - EMA(26)
//! Signal = EMA(9) of MACD

use crate::common::math;
use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const FAST_SPAN: usize = 12;
pub const SLOW_SPAN: usize = 26;
pub const SIGNAL_SPAN: usize = 9;

/// MACD line and signal line, aligned with the input candles.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// Calculate the MACD and signal line series.
///
/// Both EMAs are seeded with the first close, so the series is defined from
/// the first bar on (early entries carry the usual EMA warm-up bias).
pub fn macd_series(candles: &[Candle]) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::ema_series(&closes, FAST_SPAN);
    let slow = math::ema_series(&closes, SLOW_SPAN);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = math::ema_series(&macd_line, SIGNAL_SPAN);

    MacdSeries {
        macd: macd_line.into_iter().map(Some).collect(),
        signal: signal_line.into_iter().map(Some).collect(),
    }
}

/// Classify the latest bar: Buy if the MACD line is above its signal line,
/// otherwise Sell. MACD never votes Neutral.
pub fn classify(macd: Option<f64>, signal: Option<f64>) -> Signal {
    match (macd, signal) {
        (Some(m), Some(s)) if m > s => Signal::Buy,
        (Some(_), Some(_)) => Signal::Sell,
        _ => Signal::Neutral,
    }
}
