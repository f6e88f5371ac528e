use chrono::NaiveDate;
use dividash::indicators::volatility::bollinger::{
    bollinger_series, classify, DEFAULT_PERIOD, DEFAULT_WIDTH,
};
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
fn test_band_values_on_arithmetic_series() {
    // closes 100..119: SMA = 109.5, sample std = sqrt(35)
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let bands = bollinger_series(&candles, DEFAULT_PERIOD, DEFAULT_WIDTH);

    let middle = bands.middle[19].unwrap();
    let upper = bands.upper[19].unwrap();
    let lower = bands.lower[19].unwrap();
    let std = 35.0_f64.sqrt();
    assert!((middle - 109.5).abs() < 1e-9);
    assert!((upper - (109.5 + 2.0 * std)).abs() < 1e-9);
    assert!((lower - (109.5 - 2.0 * std)).abs() < 1e-9);
    // a steady climb stays inside a 2-sigma band
    assert_eq!(classify(119.0, bands.upper[19], bands.lower[19]), Signal::Neutral);
}

#[test]
fn test_warmup_entries_are_undefined() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let bands = bollinger_series(&candles, DEFAULT_PERIOD, DEFAULT_WIDTH);
    assert!(bands.upper[..DEFAULT_PERIOD - 1].iter().all(|v| v.is_none()));
    assert!(bands.upper[DEFAULT_PERIOD - 1].is_some());
}

#[test]
fn test_spike_above_upper_band_is_sell() {
    // 19 flat bars then a jump: mean = 101.5, std = sqrt(45) ≈ 6.708,
    // upper ≈ 114.9 < 130
    let mut closes = vec![100.0; 19];
    closes.push(130.0);
    let candles = candles_from_closes(&closes);
    let bands = bollinger_series(&candles, DEFAULT_PERIOD, DEFAULT_WIDTH);
    assert_eq!(classify(130.0, bands.upper[19], bands.lower[19]), Signal::Sell);
}

#[test]
fn test_drop_below_lower_band_is_buy() {
    let mut closes = vec![100.0; 19];
    closes.push(70.0);
    let candles = candles_from_closes(&closes);
    let bands = bollinger_series(&candles, DEFAULT_PERIOD, DEFAULT_WIDTH);
    assert_eq!(classify(70.0, bands.upper[19], bands.lower[19]), Signal::Buy);
}

#[test]
fn test_collapsed_band_has_no_signal() {
    // constant price: upper == middle == lower, both touch rules would
    // fire at once, so the verdict is Neutral
    let candles = candles_from_closes(&vec![42.0; 30]);
    let bands = bollinger_series(&candles, DEFAULT_PERIOD, DEFAULT_WIDTH);
    let last = candles.len() - 1;
    assert_eq!(bands.upper[last], bands.lower[last]);
    assert_eq!(classify(42.0, bands.upper[last], bands.lower[last]), Signal::Neutral);
}
