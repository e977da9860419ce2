//! Pipeline facade: indicators, events, trend, recommendation.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::models::price::PriceSeries;
use crate::models::recommendation::Recommendation;
use crate::models::signal::{SignalEvent, TrendSummary};
use crate::signals::detector::{detect_events, IndicatorBundle};
use crate::signals::trend::trend_summary;
use crate::synthesis;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything one analysis pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub indicators: IndicatorBundle,
    pub events: Vec<SignalEvent>,
    pub trend: TrendSummary,
    pub recommendation: Recommendation,
}

/// Stateless pipeline entry point.
///
/// Every call computes from scratch over the caller's series; there is no
/// shared state between invocations, so concurrent calls for different
/// symbols need no coordination.
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn analyze(
        series: &PriceSeries,
        config: &AnalysisConfig,
    ) -> Result<Analysis, AnalysisError> {
        config.validate()?;
        debug!(bars = series.len(), "computing indicator bundle");
        let indicators = IndicatorBundle::compute(series, &config.indicators)?;
        let events = detect_events(series, &indicators, &config.detection)?;
        let trend = trend_summary(series, &config.detection)?;
        let recommendation =
            synthesis::synthesize(series, &events, &indicators.atr, &config.synthesis);
        info!(
            bars = series.len(),
            events = events.len(),
            action = ?recommendation.action,
            confidence = recommendation.confidence,
            "analysis complete"
        );
        Ok(Analysis {
            indicators,
            events,
            trend,
            recommendation,
        })
    }
}
