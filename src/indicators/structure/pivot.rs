//! Classic pivot-point support and resistance levels.

use crate::models::price::PriceBar;
use serde::{Deserialize, Serialize};

/// Pivot levels derived from one bar's high/low/close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pivot: f64,
    pub support1: f64,
    pub support2: f64,
    pub support3: f64,
    pub resistance1: f64,
    pub resistance2: f64,
    pub resistance3: f64,
}

/// Classic pivot formula over the prior period's bar.
///
/// pivot = (H + L + C) / 3
/// S1 = 2 * pivot - H, R1 = 2 * pivot - L
/// S2/R2 extend by the bar range, S3/R3 by twice the pivot distance.
pub fn pivot_levels(bar: &PriceBar) -> PivotLevels {
    let pivot = (bar.high + bar.low + bar.close) / 3.0;
    let range = bar.high - bar.low;
    PivotLevels {
        pivot,
        support1: 2.0 * pivot - bar.high,
        support2: pivot - range,
        support3: bar.low - 2.0 * (bar.high - pivot),
        resistance1: 2.0 * pivot - bar.low,
        resistance2: pivot + range,
        resistance3: bar.high + 2.0 * (pivot - bar.low),
    }
}
