use chrono::NaiveDate;
use dividash::indicators::momentum::cci::{cci_series, classify, DEFAULT_PERIOD};
use dividash::models::market::Candle;
use dividash::models::signal::Signal;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(start + chrono::Days::new(i as u64), c, c + 0.5, c - 1.0, c))
        .collect()
}

#[test]
fn test_reference_value_on_arithmetic_series() {
    // closes 100..124, high = c + 0.5, low = c - 1.0 -> tp = c - 1/6.
    // Last 20-bar window: tp - mean(tp) = 124 - 114.5 = 9.5, MAD = 5.0,
    // CCI = 9.5 / (0.015 * 5.0) = 126.666...
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let cci = cci_series(&candles, DEFAULT_PERIOD);
    let last = cci.last().unwrap().unwrap();
    assert!((last - 9.5 / 0.075).abs() < 1e-9, "got {}", last);
    assert_eq!(classify(Some(last)), Signal::Sell);
}

#[test]
fn test_warmup_entries_are_undefined() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let cci = cci_series(&candles, DEFAULT_PERIOD);
    assert!(cci[..DEFAULT_PERIOD - 1].iter().all(|v| v.is_none()));
    assert!(cci[DEFAULT_PERIOD - 1].is_some());
}

#[test]
fn test_flat_window_has_no_signal() {
    // Zero mean absolute deviation would divide by zero; the entry stays
    // undefined instead.
    let candles = candles_from_closes(&vec![42.0; 30]);
    let cci = cci_series(&candles, DEFAULT_PERIOD);
    assert!(cci.iter().all(|v| v.is_none()));
    assert_eq!(classify(None), Signal::Neutral);
}

#[test]
fn test_classify_bands_are_strict() {
    assert_eq!(classify(Some(100.0)), Signal::Neutral);
    assert_eq!(classify(Some(-100.0)), Signal::Neutral);
    assert_eq!(classify(Some(100.5)), Signal::Sell);
    assert_eq!(classify(Some(-100.5)), Signal::Buy);
}
