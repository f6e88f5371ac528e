//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (width * rolling standard deviation)
//! Lower Band = Middle - (width * rolling standard deviation)

use crate::common::math;
use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_WIDTH: f64 = 2.0;

/// Upper, middle, and lower band series aligned with the input candles.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate the Bollinger Band series over the close prices.
pub fn bollinger_series(candles: &[Candle], period: usize, width: f64) -> BollingerSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::rolling_sma(&closes, period);
    let std = math::rolling_std(&closes, period);

    let upper = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + width * s),
            _ => None,
        })
        .collect();
    let lower = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - width * s),
            _ => None,
        })
        .collect();

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

/// Classify the latest bar: Buy at or below the lower band, Sell at or above
/// the upper band, else Neutral. A collapsed band (zero width, both
/// touch rules would fire at once) carries no signal.
pub fn classify(close: f64, upper: Option<f64>, lower: Option<f64>) -> Signal {
    match (upper, lower) {
        (Some(upper), Some(lower)) if upper > lower => {
            if close <= lower {
                Signal::Buy
            } else if close >= upper {
                Signal::Sell
            } else {
                Signal::Neutral
            }
        }
        _ => Signal::Neutral,
    }
}
