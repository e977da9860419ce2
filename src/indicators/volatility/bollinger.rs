//! Bollinger Bands indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::{BollingerSeries, IndicatorSeries};

/// Calculate Bollinger Bands.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + k * sigma
/// Lower Band = Middle - k * sigma
///
/// Sigma is the population standard deviation over the same window.
pub fn bollinger(
    series: &PriceSeries,
    period: usize,
    k: f64,
) -> Result<BollingerSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "bollinger_period",
            period as f64,
            "must be at least 1",
        ));
    }
    if !k.is_finite() || k <= 0.0 {
        return Err(AnalysisError::parameter(
            "bollinger_k",
            k,
            "must be a positive number",
        ));
    }

    let closes = series.closes();
    let middle = math::sma_series(&closes, period);
    let std = math::rolling_std_series(&closes, period);

    let upper: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + k * s),
            _ => None,
        })
        .collect();
    let lower: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - k * s),
            _ => None,
        })
        .collect();

    Ok(BollingerSeries {
        upper: IndicatorSeries::new(upper),
        middle: IndicatorSeries::new(middle),
        lower: IndicatorSeries::new(lower),
    })
}
