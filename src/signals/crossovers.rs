//! Sign-flip crossover detection for MACD and moving-average pairs.

use crate::config::DetectionConfig;
use crate::error::AnalysisError;
use crate::indicators::trend;
use crate::models::price::PriceSeries;
use crate::models::series::{IndicatorSeries, MacdSeries};
use crate::models::signal::{MaKind, MaSpec, SignalDetails, SignalEvent, SignalKind};

const STRONG_CROSS: f64 = 0.9;
const MODERATE_CROSS: f64 = 0.6;

/// Detect MACD line / signal line crossovers.
///
/// A bullish crossover below the zero line (and a bearish one above it) is
/// the stronger setup.
pub fn macd_cross_events(series: &PriceSeries, macd: &MacdSeries) -> Vec<SignalEvent> {
    let bars = series.bars();
    let diff: Vec<Option<f64>> = (0..bars.len())
        .map(|i| match (macd.macd.get(i), macd.signal.get(i)) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    sign_flips(&diff)
        .into_iter()
        .map(|(i, direction)| {
            let macd_value = macd.macd.get(i).unwrap_or(0.0);
            let signal_value = macd.signal.get(i).unwrap_or(0.0);
            let strong = (direction > 0 && macd_value < 0.0)
                || (direction < 0 && macd_value > 0.0);
            SignalEvent {
                date: bars[i].date,
                kind: if direction > 0 {
                    SignalKind::MacdBullishCross
                } else {
                    SignalKind::MacdBearishCross
                },
                strength: if strong { STRONG_CROSS } else { MODERATE_CROSS },
                details: SignalDetails::MacdCross {
                    macd: macd_value,
                    signal: signal_value,
                },
            }
        })
        .collect()
}

/// Detect golden/death crosses for every configured moving-average pair.
///
/// Long-horizon pairs (long leg of 100 bars or more) carry the classic
/// golden-cross weight; shorter pairs are moderate.
pub fn ma_cross_events(
    series: &PriceSeries,
    config: &DetectionConfig,
) -> Result<Vec<SignalEvent>, AnalysisError> {
    let bars = series.bars();
    let mut events = Vec::new();

    for pair in &config.ma_pairs {
        let short = ma_series(series, &pair.short)?;
        let long = ma_series(series, &pair.long)?;
        let diff: Vec<Option<f64>> = (0..bars.len())
            .map(|i| match (short.get(i), long.get(i)) {
                (Some(s), Some(l)) => Some(s - l),
                _ => None,
            })
            .collect();

        for (i, direction) in sign_flips(&diff) {
            events.push(SignalEvent {
                date: bars[i].date,
                kind: if direction > 0 {
                    SignalKind::GoldenCross
                } else {
                    SignalKind::DeathCross
                },
                strength: if pair.long.period >= 100 {
                    STRONG_CROSS
                } else {
                    MODERATE_CROSS
                },
                details: SignalDetails::MaCross {
                    pair: *pair,
                    short_value: short.get(i).unwrap_or(0.0),
                    long_value: long.get(i).unwrap_or(0.0),
                },
            });
        }
    }

    Ok(events)
}

fn ma_series(series: &PriceSeries, spec: &MaSpec) -> Result<IndicatorSeries, AnalysisError> {
    match spec.kind {
        MaKind::Sma => trend::sma(series, spec.period),
        MaKind::Ema => trend::ema(series, spec.period),
    }
}

/// Indices where the difference line's sign flips, judged against the last
/// non-zero sign. Exactly-equal bars neither fire nor update the sign, so
/// equality noise cannot fake a crossover.
fn sign_flips(diff: &[Option<f64>]) -> Vec<(usize, i8)> {
    let mut flips = Vec::new();
    let mut last_sign: i8 = 0;
    for (i, value) in diff.iter().enumerate() {
        let Some(value) = value else { continue };
        let sign = if *value > 0.0 {
            1
        } else if *value < 0.0 {
            -1
        } else {
            continue;
        };
        if last_sign != 0 && sign != last_sign {
            flips.push((i, sign));
        }
        last_sign = sign;
    }
    flips
}
