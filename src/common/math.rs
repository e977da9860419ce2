//! Rolling-window and smoothing primitives shared by all indicators.
//!
//! Every function returns a vector aligned index-for-index with its input;
//! `None` marks positions where the window has not filled yet.

/// Simple moving average. Index `i` holds the mean of
/// `values[i + 1 - period ..= i]` once a full window has accumulated.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);
    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Exponential moving average, seeded with the SMA of the first `period`
/// values and smoothed with `alpha = 2 / (period + 1)`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut ema = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(ema);
    for i in period..values.len() {
        ema += alpha * (values[i] - ema);
        out[i] = Some(ema);
    }
    out
}

/// Population standard deviation over a rolling window, aligned like
/// [`sma_series`].
pub fn rolling_std_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance =
            window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / period as f64;
        out[i] = Some(variance.sqrt());
    }
    out
}

/// Wilder's smoothing: `alpha = 1 / period`, seeded with the simple average
/// of the first `period` values.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let period_f = period as f64;
    let mut avg = values[..period].iter().sum::<f64>() / period_f;
    out[period - 1] = Some(avg);
    for i in period..values.len() {
        avg = (avg * (period_f - 1.0) + values[i]) / period_f;
        out[i] = Some(avg);
    }
    out
}

/// SMA over the defined suffix of a partially-undefined line, preserving the
/// leading undefined region.
pub fn sma_over_defined(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    apply_over_defined(values, period, sma_series)
}

/// EMA over the defined suffix of a partially-undefined line, preserving the
/// leading undefined region.
pub fn ema_over_defined(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    apply_over_defined(values, period, ema_series)
}

fn apply_over_defined(
    values: &[Option<f64>],
    period: usize,
    inner: fn(&[f64], usize) -> Vec<Option<f64>>,
) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };
    let defined: Vec<f64> = values[start..].iter().flatten().copied().collect();
    for (i, v) in inner(&defined, period).into_iter().enumerate() {
        out[start + i] = v;
    }
    out
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}
