//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::{IndicatorSeries, MacdSeries};

/// Calculate the MACD line bundle.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD line
/// Histogram = MACD - Signal
///
/// EMAs are SMA-seeded, so the macd line is defined from index `slow - 1`
/// and the signal line from `slow + signal - 2`. The histogram exists
/// wherever both are defined.
pub fn macd(
    series: &PriceSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries, AnalysisError> {
    if fast == 0 {
        return Err(AnalysisError::parameter(
            "macd_fast",
            fast as f64,
            "must be at least 1",
        ));
    }
    if slow <= fast {
        return Err(AnalysisError::parameter(
            "macd_slow",
            slow as f64,
            "must exceed the fast period",
        ));
    }
    if signal == 0 {
        return Err(AnalysisError::parameter(
            "macd_signal",
            signal as f64,
            "must be at least 1",
        ));
    }

    let closes = series.closes();
    let fast_ema = math::ema_series(&closes, fast);
    let slow_ema = math::ema_series(&closes, slow);

    let macd_line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let signal_line = math::ema_over_defined(&macd_line, signal);

    let histogram: Vec<Option<f64>> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Ok(MacdSeries {
        macd: IndicatorSeries::new(macd_line),
        signal: IndicatorSeries::new(signal_line),
        histogram: IndicatorSeries::new(histogram),
    })
}
