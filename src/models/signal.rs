//! Signal events, trend classification, and their kind-specific payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directional bias a signal kind carries into synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
}

/// Closed set of detectable signal events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    RsiOversold,
    RsiOverbought,
    RsiBullishDivergence,
    RsiBearishDivergence,
    MacdBullishCross,
    MacdBearishCross,
    GoldenCross,
    DeathCross,
    SupportTouch,
    ResistanceTouch,
}

impl SignalKind {
    pub fn bias(&self) -> Bias {
        match self {
            SignalKind::RsiOversold
            | SignalKind::RsiBullishDivergence
            | SignalKind::MacdBullishCross
            | SignalKind::GoldenCross
            | SignalKind::SupportTouch => Bias::Bullish,
            SignalKind::RsiOverbought
            | SignalKind::RsiBearishDivergence
            | SignalKind::MacdBearishCross
            | SignalKind::DeathCross
            | SignalKind::ResistanceTouch => Bias::Bearish,
        }
    }
}

/// Moving-average flavor for configurable cross pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaKind {
    Sma,
    Ema,
}

/// One leg of a moving-average cross pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaSpec {
    pub kind: MaKind,
    pub period: usize,
}

impl MaSpec {
    pub const fn sma(period: usize) -> Self {
        Self {
            kind: MaKind::Sma,
            period,
        }
    }

    pub const fn ema(period: usize) -> Self {
        Self {
            kind: MaKind::Ema,
            period,
        }
    }

    pub fn label(&self) -> String {
        let prefix = match self.kind {
            MaKind::Sma => "SMA",
            MaKind::Ema => "EMA",
        };
        format!("{prefix}{}", self.period)
    }
}

/// Short/long pair watched for golden and death crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaPair {
    pub short: MaSpec,
    pub long: MaSpec,
}

impl MaPair {
    pub const fn new(short: MaSpec, long: MaSpec) -> Self {
        Self { short, long }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.short.label(), self.long.label())
    }
}

/// Where a support or resistance level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSource {
    Pivot,
    BollingerBand,
}

/// Kind-specific payload attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalDetails {
    RsiThreshold {
        rsi: f64,
    },
    RsiDivergence {
        first_date: NaiveDate,
        first_close: f64,
        first_rsi: f64,
        second_close: f64,
        second_rsi: f64,
    },
    MacdCross {
        macd: f64,
        signal: f64,
    },
    MaCross {
        pair: MaPair,
        short_value: f64,
        long_value: f64,
    },
    LevelTouch {
        level: f64,
        price: f64,
        source: LevelSource,
    },
}

/// A point-in-time signal occurrence.
///
/// Events are derived facts: re-running detection over the same series
/// reproduces them identically, and nothing mutates them after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub date: NaiveDate,
    pub kind: SignalKind,
    /// In [0, 1].
    pub strength: f64,
    pub details: SignalDetails,
}

/// Direction of one moving-average relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Composite label across the three timeframes. Mixed means no two
/// timeframes agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeTrend {
    Up,
    Down,
    Flat,
    Mixed,
}

/// Multi-timeframe trend state: close vs EMA(short), EMA(short) vs
/// EMA(long), SMA(mid) vs SMA(long).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub short_term: TrendDirection,
    pub medium_term: TrendDirection,
    pub long_term: TrendDirection,
    pub composite: CompositeTrend,
}
