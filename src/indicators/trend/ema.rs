//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;

/// Calculate the EMA of closes for a specific period.
///
/// Seeded with the SMA of the first `period` closes, smoothing factor
/// `2 / (period + 1)`.
pub fn ema(series: &PriceSeries, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "ema_period",
            period as f64,
            "must be at least 1",
        ));
    }
    Ok(IndicatorSeries::new(math::ema_series(
        &series.closes(),
        period,
    )))
}
