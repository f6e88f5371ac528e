//! Shared numeric-series utilities used by the indicator computations.
//!
//! All rolling functions return a series aligned index-for-index with the
//! input; entries before the window is full are `None`, never a fabricated
//! number.

/// Arithmetic mean of a slice. Empty input yields 0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Exponential moving average series.
///
/// Recurrence: `ema[t] = x[t] * alpha + ema[t-1] * (1 - alpha)` with
/// `alpha = 2 / (span + 1)`, seeded with the first value (not a simple
/// average of the first window).
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() || span == 0 {
        return out;
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema = values[0];
    out.push(ema);
    for &value in &values[1..] {
        ema = value * alpha + ema * (1.0 - alpha);
        out.push(ema);
    }
    out
}

/// Exponential smoothing with an explicit alpha, seeded with the first
/// value. Wilder's smoothing is this with `alpha = 1 / period`.
pub fn smoothed_series(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    let mut acc = values[0];
    out.push(acc);
    for &value in &values[1..] {
        acc = value * alpha + acc * (1.0 - alpha);
        out.push(acc);
    }
    out
}

/// Rolling simple moving average over a trailing window.
pub fn rolling_sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, mean)
}

/// Rolling sample standard deviation (n - 1 denominator) over a trailing
/// window.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        if w.len() < 2 {
            return 0.0;
        }
        let m = mean(w);
        let var = w.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (w.len() as f64 - 1.0);
        var.sqrt()
    })
}

/// Rolling mean absolute deviation from the window mean.
pub fn rolling_mean_abs_dev(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        let m = mean(w);
        w.iter().map(|v| (v - m).abs()).sum::<f64>() / w.len() as f64
    })
}

/// Rolling minimum over a trailing window.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Rolling maximum over a trailing window.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

fn rolling<F>(values: &[f64], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        out[i] = Some(f(slice));
    }
    out
}
