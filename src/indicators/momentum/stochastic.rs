//! Stochastic Oscillator (%K, %D)

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::{IndicatorSeries, StochasticSeries};

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowestLow(period)) / (highestHigh(period) - lowestLow(period))
/// %D = SMA(%K, smooth)
///
/// A zero high-low range (no movement inside the window) emits 50 instead of
/// dividing by zero.
pub fn stochastic(
    series: &PriceSeries,
    period: usize,
    smooth: usize,
) -> Result<StochasticSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "stochastic_period",
            period as f64,
            "must be at least 1",
        ));
    }
    if smooth == 0 {
        return Err(AnalysisError::parameter(
            "stochastic_smooth",
            smooth as f64,
            "must be at least 1",
        ));
    }

    let bars = series.bars();
    let mut percent_k = vec![None; bars.len()];
    if bars.len() >= period {
        for i in (period - 1)..bars.len() {
            let window = &bars[i + 1 - period..=i];
            let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
            let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
            let range = highest - lowest;
            percent_k[i] = Some(if range == 0.0 {
                50.0
            } else {
                100.0 * (bars[i].close - lowest) / range
            });
        }
    }

    let percent_d = math::sma_over_defined(&percent_k, smooth);

    Ok(StochasticSeries {
        percent_k: IndicatorSeries::new(percent_k),
        percent_d: IndicatorSeries::new(percent_d),
    })
}
