//! CCI (Commodity Channel Index) indicator
//!
//! CCI = (tp - SMA(tp, period)) / (0.015 * MAD(tp, period))
//! where tp is the typical price `(high + low + close) / 3` and MAD is the
//! rolling mean absolute deviation from the window mean.

use crate::common::math;
use crate::models::market::Candle;
use crate::models::signal::Signal;

pub const DEFAULT_PERIOD: usize = 20;
pub const LOWER_BAND: f64 = -100.0;
pub const UPPER_BAND: f64 = 100.0;
const SCALE: f64 = 0.015;

/// Calculate the CCI series aligned with the input candles.
///
/// A zero mean absolute deviation (flat window) leaves the entry `None`
/// rather than dividing by zero.
pub fn cci_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let tp: Vec<f64> = candles.iter().map(|c| c.typical_price()).collect();
    let sma = math::rolling_sma(&tp, period);
    let mad = math::rolling_mean_abs_dev(&tp, period);

    tp.iter()
        .zip(sma.iter().zip(&mad))
        .map(|(tp, (sma, mad))| match (sma, mad) {
            (Some(sma), Some(mad)) if *mad > 0.0 => Some((tp - sma) / (SCALE * mad)),
            _ => None,
        })
        .collect()
}

/// Classify the latest bar: Buy below -100, Sell above +100, else Neutral.
pub fn classify(cci: Option<f64>) -> Signal {
    match cci {
        Some(v) if v < LOWER_BAND => Signal::Buy,
        Some(v) if v > UPPER_BAND => Signal::Sell,
        _ => Signal::Neutral,
    }
}
