use chrono::NaiveDate;
use dividash::indicators::momentum::rsi::{classify, rsi_series, DEFAULT_PERIOD};
use dividash::models::market::Candle;
use dividash::models::signal::Signal;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(start + chrono::Days::new(i as u64), c, c + 0.5, c - 0.5, c))
        .collect()
}

#[test]
fn test_first_bar_is_undefined() {
    let candles = candles_from_closes(&[10.0, 11.0, 12.0]);
    let rsi = rsi_series(&candles, DEFAULT_PERIOD);
    assert_eq!(rsi[0], None);
    assert!(rsi[1].is_some());
}

#[test]
fn test_known_value_after_mixed_moves() {
    // closes 1,2,3,2: gains [1,1,0], losses [0,0,1], alpha = 1/14
    // avg_gain = 1, 1, 13/14; avg_loss = 0, 0, 1/14 -> RS = 13, RSI = 1300/14
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 2.0]);
    let rsi = rsi_series(&candles, 14);
    let value = rsi[3].unwrap();
    assert!((value - 1300.0 / 14.0).abs() < 1e-9, "got {}", value);
    assert_eq!(classify(rsi[3]), Signal::Sell);
}

#[test]
fn test_monotone_rise_pins_rsi_at_100() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = rsi_series(&candles, DEFAULT_PERIOD);
    let last = rsi.last().unwrap().unwrap();
    assert_eq!(last, 100.0);
    assert_eq!(classify(Some(last)), Signal::Sell);
}

#[test]
fn test_rise_then_flat_stays_overbought() {
    // 20 rising bars then flat: losses never appear, gains only decay,
    // so RSI stays pinned at 100 and the signal stays Sell.
    let mut closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    closes.extend(std::iter::repeat(119.0).take(15));
    let candles = candles_from_closes(&closes);
    let rsi = rsi_series(&candles, DEFAULT_PERIOD);
    let last = rsi.last().unwrap().unwrap();
    assert!(last > 70.0);
    assert_eq!(classify(Some(last)), Signal::Sell);
}

#[test]
fn test_constant_series_has_no_signal() {
    let candles = candles_from_closes(&vec![42.0; 30]);
    let rsi = rsi_series(&candles, DEFAULT_PERIOD);
    assert!(rsi.iter().all(|v| v.is_none()));
    assert_eq!(classify(None), Signal::Neutral);
}

#[test]
fn test_monotone_fall_reads_oversold() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 - i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = rsi_series(&candles, DEFAULT_PERIOD);
    let last = rsi.last().unwrap().unwrap();
    assert_eq!(last, 0.0);
    assert_eq!(classify(Some(last)), Signal::Buy);
}

#[test]
fn test_classify_boundaries_are_strict() {
    assert_eq!(classify(Some(30.0)), Signal::Neutral);
    assert_eq!(classify(Some(70.0)), Signal::Neutral);
    assert_eq!(classify(Some(29.999)), Signal::Buy);
    assert_eq!(classify(Some(70.001)), Signal::Sell);
}
