use chrono::NaiveDate;
use dividash::indicators::momentum::stochastic::{
    classify, stochastic_k_series, DEFAULT_PERIOD,
};
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
fn test_reference_value_on_rising_series() {
    // closes 100..114; last 14-bar window: min low = 100, max high = 114.5,
    // %K = (114 - 100) / 14.5 * 100
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let k = stochastic_k_series(&candles, DEFAULT_PERIOD);
    let last = k.last().unwrap().unwrap();
    assert!((last - 14.0 / 14.5 * 100.0).abs() < 1e-9, "got {}", last);
    assert_eq!(classify(Some(last)), Signal::Sell);
}

#[test]
fn test_warmup_entries_are_undefined() {
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let k = stochastic_k_series(&candles, DEFAULT_PERIOD);
    assert!(k[..DEFAULT_PERIOD - 1].iter().all(|v| v.is_none()));
    assert!(k[DEFAULT_PERIOD - 1].is_some());
}

#[test]
fn test_zero_range_has_no_signal() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    // high == low == close over the whole window
    let candles: Vec<Candle> = (0..20)
        .map(|i| Candle::new(start + chrono::Days::new(i as u64), 42.0, 42.0, 42.0, 42.0))
        .collect();
    let k = stochastic_k_series(&candles, DEFAULT_PERIOD);
    assert!(k.iter().all(|v| v.is_none()));
    assert_eq!(classify(None), Signal::Neutral);
}

#[test]
fn test_classify_bands_are_strict() {
    assert_eq!(classify(Some(20.0)), Signal::Neutral);
    assert_eq!(classify(Some(80.0)), Signal::Neutral);
    assert_eq!(classify(Some(19.9)), Signal::Buy);
    assert_eq!(classify(Some(80.1)), Signal::Sell);
}
