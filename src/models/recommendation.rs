//! Composite trading recommendation.

use crate::models::signal::SignalEvent;
use serde::{Deserialize, Serialize};

/// Final call for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// Weighted synthesis of the recent event stream.
///
/// Owned by the caller that requested it; the core keeps no copy. Stop and
/// target levels are present only for Buy/Sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    /// In [0, 1].
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    /// Every event inside the lookback window, most recent first.
    pub contributing_events: Vec<SignalEvent>,
}

impl Recommendation {
    /// The neutral answer for series too short to analyze.
    pub fn hold() -> Self {
        Self {
            action: Action::Hold,
            confidence: 0.0,
            stop_loss: None,
            take_profit: None,
            contributing_events: Vec::new(),
        }
    }
}
