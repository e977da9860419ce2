//! RSI threshold-crossing events.

use crate::config::DetectionConfig;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;
use crate::models::signal::{SignalDetails, SignalEvent, SignalKind};

/// Detect oversold/overbought entries.
///
/// An event fires only on the bar where RSI crosses the threshold, not on
/// every bar spent beyond it. Strength grows linearly with the distance past
/// the threshold, reaching 1.0 at `rsi_strength_span` points.
pub fn rsi_threshold_events(
    series: &PriceSeries,
    rsi: &IndicatorSeries,
    config: &DetectionConfig,
) -> Vec<SignalEvent> {
    let bars = series.bars();
    let mut events = Vec::new();

    for i in 1..bars.len() {
        let (Some(prev), Some(curr)) = (rsi.get(i - 1), rsi.get(i)) else {
            continue;
        };

        if prev >= config.rsi_oversold && curr < config.rsi_oversold {
            events.push(SignalEvent {
                date: bars[i].date,
                kind: SignalKind::RsiOversold,
                strength: threshold_strength(config.rsi_oversold - curr, config.rsi_strength_span),
                details: SignalDetails::RsiThreshold { rsi: curr },
            });
        } else if prev <= config.rsi_overbought && curr > config.rsi_overbought {
            events.push(SignalEvent {
                date: bars[i].date,
                kind: SignalKind::RsiOverbought,
                strength: threshold_strength(
                    curr - config.rsi_overbought,
                    config.rsi_strength_span,
                ),
                details: SignalDetails::RsiThreshold { rsi: curr },
            });
        }
    }

    events
}

fn threshold_strength(distance: f64, span: f64) -> f64 {
    (distance / span).clamp(0.0, 1.0)
}
