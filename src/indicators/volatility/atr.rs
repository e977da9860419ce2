//! ATR (Average True Range) indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;

/// Calculate the ATR series.
///
/// TR = max(high - low, |high - prevClose|, |low - prevClose|), then
/// Wilder-smoothed over `period`. The first true range needs a previous
/// close, so values are defined from bar index `period` on.
pub fn atr(series: &PriceSeries, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "atr_period",
            period as f64,
            "must be at least 1",
        ));
    }

    let bars = series.bars();
    let mut values = vec![None; bars.len()];
    if bars.len() < period + 1 {
        return Ok(IndicatorSeries::new(values));
    }

    let true_ranges: Vec<f64> = (1..bars.len())
        .map(|i| math::true_range(bars[i].high, bars[i].low, bars[i - 1].close))
        .collect();

    for (i, smoothed) in math::wilder_series(&true_ranges, period)
        .into_iter()
        .enumerate()
    {
        values[i + 1] = smoothed;
    }

    Ok(IndicatorSeries::new(values))
}
