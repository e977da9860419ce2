//! Weighted composite recommendation from the detected event stream.

pub mod decision;
pub mod weights;

pub use weights::SignalWeights;

use crate::config::SynthesisConfig;
use crate::models::price::PriceSeries;
use crate::models::recommendation::{Action, Recommendation};
use crate::models::series::IndicatorSeries;
use crate::models::signal::SignalEvent;

/// Combine the event stream into one Buy/Sell/Hold call.
///
/// Each event inside the lookback window contributes its signed base weight,
/// scaled by event strength and decayed linearly with bar age (1.0 at the
/// latest bar, falling to zero at the window edge). A net score above the
/// buy threshold answers Buy, below the sell threshold Sell, otherwise Hold;
/// confidence is the clamped magnitude of the net score.
///
/// A series shorter than `min_bars` is a data condition, not an error: the
/// answer is Hold with zero confidence and no contributing events.
pub fn synthesize(
    series: &PriceSeries,
    events: &[SignalEvent],
    atr: &IndicatorSeries,
    config: &SynthesisConfig,
) -> Recommendation {
    let Some(last) = series.last() else {
        return Recommendation::hold();
    };
    if series.len() < config.min_bars {
        return Recommendation::hold();
    }

    let last_index = series.len() - 1;
    let lookback = config.lookback_bars;
    let mut net = 0.0;
    let mut window = Vec::new();

    for event in events {
        let Some(index) = series.index_of(event.date) else {
            continue;
        };
        let age = last_index - index;
        if age >= lookback {
            continue;
        }
        let decay = 1.0 - age as f64 / lookback as f64;
        net += config.weights.signed(event.kind) * event.strength * decay;
        window.push(event.clone());
    }

    // Most recent first, whether or not an event moved the final action.
    window.sort_by(|a, b| b.date.cmp(&a.date));

    let action = if net > config.buy_threshold {
        Action::Buy
    } else if net < config.sell_threshold {
        Action::Sell
    } else {
        Action::Hold
    };
    let (stop_loss, take_profit) =
        decision::protective_levels(action, last.close, atr.last_defined(), config);

    Recommendation {
        action,
        confidence: net.abs().min(1.0),
        stop_loss,
        take_profit,
        contributing_events: window,
    }
}
