//! ATR-derived protective levels.

use crate::config::SynthesisConfig;
use crate::models::recommendation::Action;

/// Stop-loss / take-profit bracket around the latest close.
///
/// Buy places the stop `stop_loss_atr` ATRs below and the target
/// `take_profit_atr` ATRs above; Sell mirrors the signs. Hold, or a series
/// too short to have an ATR, carries neither.
pub fn protective_levels(
    action: Action,
    close: f64,
    atr: Option<f64>,
    config: &SynthesisConfig,
) -> (Option<f64>, Option<f64>) {
    let Some(atr) = atr else {
        return (None, None);
    };
    match action {
        Action::Buy => (
            Some(close - config.stop_loss_atr * atr),
            Some(close + config.take_profit_atr * atr),
        ),
        Action::Sell => (
            Some(close + config.stop_loss_atr * atr),
            Some(close - config.take_profit_atr * atr),
        ),
        Action::Hold => (None, None),
    }
}
