//! Boolean screening predicates over a symbol universe.
//!
//! Data acquisition stays outside the core: callers hand in already
//! normalized series per symbol and get back the symbols passing every
//! predicate. The predicates reuse the same indicator and event primitives
//! as the analysis pipeline.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::indicators::{momentum, trend};
use crate::models::price::PriceSeries;
use crate::models::signal::SignalKind;
use crate::signals::detector::{detect_events, IndicatorBundle};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// Latest RSI strictly below the bound (oversold screens).
    RsiBelow { bound: f64 },
    /// Latest RSI strictly above the bound (overbought screens).
    RsiAbove { bound: f64 },
    /// Latest close above the SMA of the given period.
    CloseAboveSma { period: usize },
    /// Latest close below the SMA of the given period.
    CloseBelowSma { period: usize },
    /// Average volume over the window at or above the floor.
    AvgVolumeAtLeast { period: usize, floor: f64 },
    /// An event of the given kind within the most recent bars.
    RecentEvent { kind: SignalKind, within_bars: usize },
}

/// A symbol that passed every predicate, with its headline values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenMatch {
    pub symbol: String,
    pub close: f64,
    pub rsi: Option<f64>,
}

/// Evaluate one series against every predicate. Insufficient history simply
/// fails the predicate; it never errors.
pub fn matches(
    series: &PriceSeries,
    predicates: &[Predicate],
    config: &AnalysisConfig,
) -> Result<bool, AnalysisError> {
    for predicate in predicates {
        if !matches_one(series, predicate, config)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches_one(
    series: &PriceSeries,
    predicate: &Predicate,
    config: &AnalysisConfig,
) -> Result<bool, AnalysisError> {
    match predicate {
        Predicate::RsiBelow { bound } => {
            let rsi = momentum::rsi(series, config.indicators.rsi_period)?;
            Ok(rsi.last_defined().is_some_and(|v| v < *bound))
        }
        Predicate::RsiAbove { bound } => {
            let rsi = momentum::rsi(series, config.indicators.rsi_period)?;
            Ok(rsi.last_defined().is_some_and(|v| v > *bound))
        }
        Predicate::CloseAboveSma { period } => {
            let sma = trend::sma(series, *period)?;
            Ok(match (series.last(), sma.last_defined()) {
                (Some(bar), Some(value)) => bar.close > value,
                _ => false,
            })
        }
        Predicate::CloseBelowSma { period } => {
            let sma = trend::sma(series, *period)?;
            Ok(match (series.last(), sma.last_defined()) {
                (Some(bar), Some(value)) => bar.close < value,
                _ => false,
            })
        }
        Predicate::AvgVolumeAtLeast { period, floor } => {
            if *period == 0 {
                return Err(AnalysisError::parameter(
                    "avg_volume_period",
                    0.0,
                    "must be at least 1",
                ));
            }
            let bars = series.bars();
            if bars.len() < *period {
                return Ok(false);
            }
            let average = bars[bars.len() - period..]
                .iter()
                .map(|b| b.volume as f64)
                .sum::<f64>()
                / *period as f64;
            Ok(average >= *floor)
        }
        Predicate::RecentEvent { kind, within_bars } => {
            let indicators = IndicatorBundle::compute(series, &config.indicators)?;
            let events = detect_events(series, &indicators, &config.detection)?;
            let cutoff = series.len().saturating_sub(*within_bars);
            Ok(events.iter().any(|e| {
                e.kind == *kind && series.index_of(e.date).is_some_and(|i| i >= cutoff)
            }))
        }
    }
}

/// Screen a universe. Matches come back sorted by symbol so repeated runs
/// over the same input are identical.
pub fn screen(
    universe: &[(String, PriceSeries)],
    predicates: &[Predicate],
    config: &AnalysisConfig,
) -> Result<Vec<ScreenMatch>, AnalysisError> {
    config.validate()?;
    let mut out = Vec::new();
    for (symbol, series) in universe {
        let Some(last) = series.last() else {
            continue;
        };
        if matches(series, predicates, config)? {
            let rsi = momentum::rsi(series, config.indicators.rsi_period)?.last_defined();
            out.push(ScreenMatch {
                symbol: symbol.clone(),
                close: last.close,
                rsi,
            });
        }
    }
    out.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    debug!(
        screened = universe.len(),
        matched = out.len(),
        "screen complete"
    );
    Ok(out)
}
