//! Event-detection orchestrator.

use crate::config::{DetectionConfig, IndicatorConfig};
use crate::error::AnalysisError;
use crate::indicators::{momentum, volatility};
use crate::models::price::PriceSeries;
use crate::models::series::{BollingerSeries, IndicatorSeries, MacdSeries, StochasticSeries};
use crate::models::signal::SignalEvent;
use crate::signals::{crossovers, divergence, levels, thresholds};
use serde::{Deserialize, Serialize};

/// Every indicator series one analysis pass computes, aligned to the source
/// dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub rsi: IndicatorSeries,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
    pub stochastic: StochasticSeries,
    pub atr: IndicatorSeries,
}

impl IndicatorBundle {
    pub fn compute(
        series: &PriceSeries,
        config: &IndicatorConfig,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            rsi: momentum::rsi(series, config.rsi_period)?,
            macd: momentum::macd(
                series,
                config.macd_fast,
                config.macd_slow,
                config.macd_signal,
            )?,
            bollinger: volatility::bollinger(
                series,
                config.bollinger_period,
                config.bollinger_k,
            )?,
            stochastic: momentum::stochastic(
                series,
                config.stochastic_period,
                config.stochastic_smooth,
            )?,
            atr: volatility::atr(series, config.atr_period)?,
        })
    }
}

/// Run every detector and return events in chronological order.
///
/// Same-day ties are broken by kind, so identical inputs always produce
/// identical output regardless of detector order.
pub fn detect_events(
    series: &PriceSeries,
    indicators: &IndicatorBundle,
    config: &DetectionConfig,
) -> Result<Vec<SignalEvent>, AnalysisError> {
    let mut events = Vec::new();
    events.extend(thresholds::rsi_threshold_events(
        series,
        &indicators.rsi,
        config,
    ));
    events.extend(divergence::rsi_divergence_events(
        series,
        &indicators.rsi,
        config,
    ));
    events.extend(crossovers::macd_cross_events(series, &indicators.macd));
    events.extend(crossovers::ma_cross_events(series, config)?);
    events.extend(levels::level_touch_events(
        series,
        &indicators.bollinger,
        config,
    ));
    events.sort_by_key(|e| (e.date, e.kind));
    Ok(events)
}
