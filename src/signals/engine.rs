//! Main signal evaluation engine.
//!
//! Runs the six indicator computations over a full price series and
//! classifies the most recent bar per indicator. Pure function of its
//! input; no shared state between invocations.

use crate::indicators::momentum::{cci, momentum, rsi, stochastic};
use crate::indicators::trend::macd;
use crate::indicators::volatility::bollinger;
use crate::models::market::Candle;
use crate::models::signal::{
    IndicatorSeriesSet, IndicatorSnapshot, SignalReport, TechnicalSignals,
};
use std::fmt;

/// Minimum bars required before any signal is produced. Several indicators
/// need 20-26 bar lookbacks and would return degenerate series below this.
pub const MIN_CANDLES: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InsufficientData { required: usize, actual: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InsufficientData { required, actual } => write!(
                f,
                "insufficient price history: {} bars, {} required",
                actual, required
            ),
        }
    }
}

impl std::error::Error for EngineError {}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate the full price series and classify the latest bar.
    ///
    /// Returns the six per-indicator signals plus the complete computed
    /// series (callers may chart historical band values). Series shorter
    /// than [`MIN_CANDLES`] are rejected rather than silently computed.
    pub fn evaluate(candles: &[Candle]) -> Result<SignalReport, EngineError> {
        if candles.len() < MIN_CANDLES {
            return Err(EngineError::InsufficientData {
                required: MIN_CANDLES,
                actual: candles.len(),
            });
        }

        let macd_series = macd::macd_series(candles);
        let rsi_series = rsi::rsi_series(candles, rsi::DEFAULT_PERIOD);
        let bands = bollinger::bollinger_series(
            candles,
            bollinger::DEFAULT_PERIOD,
            bollinger::DEFAULT_WIDTH,
        );
        let cci_series = cci::cci_series(candles, cci::DEFAULT_PERIOD);
        let stoch_series = stochastic::stochastic_k_series(candles, stochastic::DEFAULT_PERIOD);
        let momentum_series = momentum::momentum_series(candles, momentum::DEFAULT_PERIOD);

        let last = candles.len() - 1;
        let close = candles[last].close;

        let latest = IndicatorSnapshot {
            close,
            macd: macd_series.macd[last],
            macd_signal: macd_series.signal[last],
            rsi: rsi_series[last],
            bollinger_upper: bands.upper[last],
            bollinger_middle: bands.middle[last],
            bollinger_lower: bands.lower[last],
            cci: cci_series[last],
            stochastic_k: stoch_series[last],
            momentum: momentum_series[last],
        };

        let signals = TechnicalSignals {
            macd: macd::classify(latest.macd, latest.macd_signal),
            rsi: rsi::classify(latest.rsi),
            bollinger: bollinger::classify(close, latest.bollinger_upper, latest.bollinger_lower),
            cci: cci::classify(latest.cci),
            stochastic: stochastic::classify(latest.stochastic_k),
            momentum: momentum::classify(latest.momentum),
        };

        Ok(SignalReport {
            signals,
            latest,
            series: IndicatorSeriesSet {
                macd: macd_series.macd,
                macd_signal: macd_series.signal,
                rsi: rsi_series,
                bollinger_upper: bands.upper,
                bollinger_middle: bands.middle,
                bollinger_lower: bands.lower,
                cci: cci_series,
                stochastic_k: stoch_series,
                momentum: momentum_series,
            },
        })
    }
}
