//! Base weights per signal-kind class.

use crate::error::AnalysisError;
use crate::models::signal::{Bias, SignalKind};
use serde::{Deserialize, Serialize};

/// Tunable base weight of each event class in the composite score.
///
/// Weights live in configuration rather than in the scoring logic so callers
/// can rebalance the mix without touching the synthesis code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub divergence: f64,
    pub macd_cross: f64,
    pub ma_cross: f64,
    pub rsi_threshold: f64,
    pub level_touch: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            divergence: 0.30,
            macd_cross: 0.25,
            ma_cross: 0.20,
            rsi_threshold: 0.15,
            level_touch: 0.10,
        }
    }
}

impl SignalWeights {
    /// Unsigned base weight for a kind.
    pub fn base(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::RsiBullishDivergence | SignalKind::RsiBearishDivergence => self.divergence,
            SignalKind::MacdBullishCross | SignalKind::MacdBearishCross => self.macd_cross,
            SignalKind::GoldenCross | SignalKind::DeathCross => self.ma_cross,
            SignalKind::RsiOversold | SignalKind::RsiOverbought => self.rsi_threshold,
            SignalKind::SupportTouch | SignalKind::ResistanceTouch => self.level_touch,
        }
    }

    /// Signed weight: bullish kinds positive, bearish negative.
    pub fn signed(&self, kind: SignalKind) -> f64 {
        match kind.bias() {
            Bias::Bullish => self.base(kind),
            Bias::Bearish => -self.base(kind),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        for (name, value) in [
            ("weights.divergence", self.divergence),
            ("weights.macd_cross", self.macd_cross),
            ("weights.ma_cross", self.ma_cross),
            ("weights.rsi_threshold", self.rsi_threshold),
            ("weights.level_touch", self.level_touch),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AnalysisError::parameter(
                    name,
                    value,
                    "must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}
