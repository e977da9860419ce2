//! Multi-timeframe trend classification.

use crate::config::DetectionConfig;
use crate::error::AnalysisError;
use crate::indicators::trend;
use crate::models::price::PriceSeries;
use crate::models::signal::{CompositeTrend, TrendDirection, TrendSummary};

/// Classify the short, medium, and long timeframes and combine them.
///
/// Short: close vs EMA(short). Medium: EMA(short) vs EMA(long).
/// Long: SMA(mid) vs SMA(long). The composite requires at least two of the
/// three to agree; full disagreement reads as Mixed.
pub fn trend_summary(
    series: &PriceSeries,
    config: &DetectionConfig,
) -> Result<TrendSummary, AnalysisError> {
    let ema_short = trend::ema(series, config.trend_ema_short)?;
    let ema_long = trend::ema(series, config.trend_ema_long)?;
    let sma_mid = trend::sma(series, config.trend_sma_mid)?;
    let sma_long = trend::sma(series, config.trend_sma_long)?;

    let close = series.last().map(|b| b.close);
    let short_term = classify(close, ema_short.last_defined(), config.flat_tolerance_pct);
    let medium_term = classify(
        ema_short.last_defined(),
        ema_long.last_defined(),
        config.flat_tolerance_pct,
    );
    let long_term = classify(
        sma_mid.last_defined(),
        sma_long.last_defined(),
        config.flat_tolerance_pct,
    );

    Ok(TrendSummary {
        short_term,
        medium_term,
        long_term,
        composite: composite_of(short_term, medium_term, long_term),
    })
}

/// An undefined leg (insufficient history) makes no trend claim and reads as
/// Flat.
fn classify(fast: Option<f64>, slow: Option<f64>, flat_tolerance: f64) -> TrendDirection {
    let (Some(fast), Some(slow)) = (fast, slow) else {
        return TrendDirection::Flat;
    };
    let relative = (fast - slow) / slow;
    if relative.abs() <= flat_tolerance {
        TrendDirection::Flat
    } else if relative > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    }
}

fn composite_of(
    short: TrendDirection,
    medium: TrendDirection,
    long: TrendDirection,
) -> CompositeTrend {
    let legs = [short, medium, long];
    for candidate in [
        TrendDirection::Up,
        TrendDirection::Down,
        TrendDirection::Flat,
    ] {
        if legs.iter().filter(|&&leg| leg == candidate).count() >= 2 {
            return match candidate {
                TrendDirection::Up => CompositeTrend::Up,
                TrendDirection::Down => CompositeTrend::Down,
                TrendDirection::Flat => CompositeTrend::Flat,
            };
        }
    }
    CompositeTrend::Mixed
}
