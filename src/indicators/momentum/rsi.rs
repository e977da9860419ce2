//! RSI (Relative Strength Index) indicator

use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;

/// Calculate the RSI series.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Both averages use Wilder's smoothing (alpha = 1/period), seeded with the
/// simple average of the first `period` changes, so values are defined from
/// bar index `period` on. A zero average loss maps to 100 rather than a
/// division blow-up.
pub fn rsi(series: &PriceSeries, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            "rsi_period",
            period as f64,
            "must be at least 1",
        ));
    }

    let closes = series.closes();
    let mut values = vec![None; closes.len()];
    if closes.len() < period + 1 {
        return Ok(IndicatorSeries::new(values));
    }

    let period_f = period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += -change;
        }
    }
    avg_gain /= period_f;
    avg_loss /= period_f;
    values[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in (period + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        values[i] = Some(rsi_value(avg_gain, avg_loss));
    }

    Ok(IndicatorSeries::new(values))
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
