//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;

/// Calculate the SMA of closes for a specific period.
pub fn sma(series: &PriceSeries, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "sma_period",
            period as f64,
            "must be at least 1",
        ));
    }
    Ok(IndicatorSeries::new(math::sma_series(
        &series.closes(),
        period,
    )))
}
