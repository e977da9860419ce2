//! Swing-point detection and price/RSI divergence.

use crate::config::DetectionConfig;
use crate::models::price::PriceSeries;
use crate::models::series::IndicatorSeries;
use crate::models::signal::{SignalDetails, SignalEvent, SignalKind};

/// Indices whose close is the maximum over a symmetric window of
/// `window` bars on each side.
pub fn swing_high_indices(closes: &[f64], window: usize) -> Vec<usize> {
    swing_indices(closes, window, |candidate, neighborhood| {
        neighborhood.iter().all(|&v| v <= candidate)
    })
}

/// Indices whose close is the minimum over the same symmetric window.
pub fn swing_low_indices(closes: &[f64], window: usize) -> Vec<usize> {
    swing_indices(closes, window, |candidate, neighborhood| {
        neighborhood.iter().all(|&v| v >= candidate)
    })
}

fn swing_indices(
    closes: &[f64],
    window: usize,
    is_extreme: fn(f64, &[f64]) -> bool,
) -> Vec<usize> {
    let mut out = Vec::new();
    if window == 0 || closes.len() < 2 * window + 1 {
        return out;
    }
    for i in window..closes.len() - window {
        if is_extreme(closes[i], &closes[i - window..=i + window]) {
            out.push(i);
        }
    }
    out
}

/// Detect RSI divergence against the two most recent comparable swings.
///
/// Bearish: price prints a higher swing high while RSI prints a lower one.
/// Bullish: price prints a lower swing low while RSI prints a higher one.
/// The event is dated at the second swing; older swings never re-trigger.
pub fn rsi_divergence_events(
    series: &PriceSeries,
    rsi: &IndicatorSeries,
    config: &DetectionConfig,
) -> Vec<SignalEvent> {
    let closes = series.closes();
    let bars = series.bars();
    let mut events = Vec::new();

    let highs = swing_high_indices(&closes, config.swing_window);
    if let Some((a, b, rsi_a, rsi_b)) = last_two_with_rsi(&highs, rsi) {
        if closes[b] > closes[a] && rsi_b < rsi_a {
            events.push(SignalEvent {
                date: bars[b].date,
                kind: SignalKind::RsiBearishDivergence,
                strength: divergence_strength(rsi_a - rsi_b),
                details: SignalDetails::RsiDivergence {
                    first_date: bars[a].date,
                    first_close: closes[a],
                    first_rsi: rsi_a,
                    second_close: closes[b],
                    second_rsi: rsi_b,
                },
            });
        }
    }

    let lows = swing_low_indices(&closes, config.swing_window);
    if let Some((a, b, rsi_a, rsi_b)) = last_two_with_rsi(&lows, rsi) {
        if closes[b] < closes[a] && rsi_b > rsi_a {
            events.push(SignalEvent {
                date: bars[b].date,
                kind: SignalKind::RsiBullishDivergence,
                strength: divergence_strength(rsi_b - rsi_a),
                details: SignalDetails::RsiDivergence {
                    first_date: bars[a].date,
                    first_close: closes[a],
                    first_rsi: rsi_a,
                    second_close: closes[b],
                    second_rsi: rsi_b,
                },
            });
        }
    }

    events
}

fn last_two_with_rsi(
    indices: &[usize],
    rsi: &IndicatorSeries,
) -> Option<(usize, usize, f64, f64)> {
    let comparable: Vec<(usize, f64)> = indices
        .iter()
        .filter_map(|&i| rsi.get(i).map(|v| (i, v)))
        .collect();
    let [.., (a, rsi_a), (b, rsi_b)] = comparable.as_slice() else {
        return None;
    };
    Some((*a, *b, *rsi_a, *rsi_b))
}

/// A ten-point RSI gap between the swings reads as full strength.
fn divergence_strength(gap: f64) -> f64 {
    (gap / 10.0).clamp(0.0, 1.0)
}
