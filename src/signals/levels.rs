//! Support/resistance touch events from pivot levels and Bollinger bands.

use crate::config::DetectionConfig;
use crate::indicators::structure::pivot_levels;
use crate::models::price::PriceSeries;
use crate::models::series::BollingerSeries;
use crate::models::signal::{LevelSource, SignalDetails, SignalEvent, SignalKind};

/// Detect touches of the prior bar's pivot levels and closes outside the
/// Bollinger outer bands.
///
/// A pivot touch fires when the bar's low (high) comes within the tolerance
/// band of support1 (resistance1). A close beyond an outer band counts as a
/// touch of that dynamic level.
pub fn level_touch_events(
    series: &PriceSeries,
    bands: &BollingerSeries,
    config: &DetectionConfig,
) -> Vec<SignalEvent> {
    let bars = series.bars();
    let mut events = Vec::new();

    for i in 1..bars.len() {
        let levels = pivot_levels(&bars[i - 1]);
        let bar = &bars[i];

        if let Some(strength) = touch_strength(bar.low, levels.support1, config.level_tolerance_pct)
        {
            events.push(SignalEvent {
                date: bar.date,
                kind: SignalKind::SupportTouch,
                strength,
                details: SignalDetails::LevelTouch {
                    level: levels.support1,
                    price: bar.low,
                    source: LevelSource::Pivot,
                },
            });
        }
        if let Some(strength) =
            touch_strength(bar.high, levels.resistance1, config.level_tolerance_pct)
        {
            events.push(SignalEvent {
                date: bar.date,
                kind: SignalKind::ResistanceTouch,
                strength,
                details: SignalDetails::LevelTouch {
                    level: levels.resistance1,
                    price: bar.high,
                    source: LevelSource::Pivot,
                },
            });
        }

        if let (Some(upper), Some(lower)) = (bands.upper.get(i), bands.lower.get(i)) {
            if bar.close > upper {
                events.push(SignalEvent {
                    date: bar.date,
                    kind: SignalKind::ResistanceTouch,
                    strength: band_breach_strength(bar.close - upper, upper - lower),
                    details: SignalDetails::LevelTouch {
                        level: upper,
                        price: bar.close,
                        source: LevelSource::BollingerBand,
                    },
                });
            } else if bar.close < lower {
                events.push(SignalEvent {
                    date: bar.date,
                    kind: SignalKind::SupportTouch,
                    strength: band_breach_strength(lower - bar.close, upper - lower),
                    details: SignalDetails::LevelTouch {
                        level: lower,
                        price: bar.close,
                        source: LevelSource::BollingerBand,
                    },
                });
            }
        }
    }

    events
}

/// Proximity inside the tolerance band maps linearly onto (0, 1]; dead-on
/// contact is a full-strength touch. `None` when the bar stayed outside the
/// band.
fn touch_strength(price: f64, level: f64, tolerance_pct: f64) -> Option<f64> {
    if level <= 0.0 {
        return None;
    }
    let distance = (price - level).abs() / level;
    if distance <= tolerance_pct {
        Some(1.0 - distance / tolerance_pct)
    } else {
        None
    }
}

/// Excess beyond the band, relative to half the band width. A collapsed band
/// (zero width) makes any breach full strength.
fn band_breach_strength(excess: f64, band_width: f64) -> f64 {
    if band_width <= 0.0 {
        return 1.0;
    }
    (excess / (0.5 * band_width)).clamp(0.0, 1.0)
}
