//! Explicit analysis configuration.
//!
//! Every period, threshold, and weight arrives through these structs; the
//! core reads no environment variables and no files. `validate` runs before
//! any computation so a bad parameter never reaches the math.

use crate::error::AnalysisError;
use crate::models::signal::{MaPair, MaSpec};
use crate::synthesis::weights::SignalWeights;
use serde::{Deserialize, Serialize};

/// Periods and multipliers for the indicator computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_k: f64,
    pub stochastic_period: usize,
    pub stochastic_smooth: usize,
    pub atr_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_k: 2.0,
            stochastic_period: 14,
            stochastic_smooth: 3,
            atr_period: 14,
        }
    }
}

/// Thresholds and windows for event detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Points past an RSI threshold mapping to full strength.
    pub rsi_strength_span: f64,
    /// Half-width, in bars, of the swing-point window.
    pub swing_window: usize,
    /// Moving-average pairs watched for golden/death crosses.
    pub ma_pairs: Vec<MaPair>,
    /// Relative tolerance for a pivot-level touch.
    pub level_tolerance_pct: f64,
    /// Relative tolerance below which two averages read as flat.
    pub flat_tolerance_pct: f64,
    pub trend_ema_short: usize,
    pub trend_ema_long: usize,
    pub trend_sma_mid: usize,
    pub trend_sma_long: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            rsi_strength_span: 10.0,
            swing_window: 5,
            ma_pairs: vec![
                MaPair::new(MaSpec::sma(50), MaSpec::sma(200)),
                MaPair::new(MaSpec::ema(9), MaSpec::ema(21)),
            ],
            level_tolerance_pct: 0.005,
            flat_tolerance_pct: 0.001,
            trend_ema_short: 9,
            trend_ema_long: 21,
            trend_sma_mid: 50,
            trend_sma_long: 200,
        }
    }
}

/// Scoring window, action thresholds, and risk multiples for synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub weights: SignalWeights,
    /// Bars of event history feeding the composite score.
    pub lookback_bars: usize,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
    /// Stop distance in ATR multiples.
    pub stop_loss_atr: f64,
    /// Target distance in ATR multiples.
    pub take_profit_atr: f64,
    /// Below this many bars the synthesizer answers Hold instead of scoring.
    pub min_bars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            lookback_bars: 90,
            buy_threshold: 0.4,
            sell_threshold: -0.4,
            stop_loss_atr: 1.5,
            take_profit_atr: 3.0,
            min_bars: 35,
        }
    }
}

/// Full configuration for one analysis pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub indicators: IndicatorConfig,
    pub detection: DetectionConfig,
    pub synthesis: SynthesisConfig,
}

impl AnalysisConfig {
    /// Reject out-of-range parameters before any computation starts.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let ind = &self.indicators;
        for (name, period) in [
            ("rsi_period", ind.rsi_period),
            ("macd_fast", ind.macd_fast),
            ("macd_signal", ind.macd_signal),
            ("bollinger_period", ind.bollinger_period),
            ("stochastic_period", ind.stochastic_period),
            ("stochastic_smooth", ind.stochastic_smooth),
            ("atr_period", ind.atr_period),
        ] {
            require_period(name, period)?;
        }
        if ind.macd_slow <= ind.macd_fast {
            return Err(AnalysisError::parameter(
                "macd_slow",
                ind.macd_slow as f64,
                "must exceed the fast period",
            ));
        }
        if !ind.bollinger_k.is_finite() || ind.bollinger_k <= 0.0 {
            return Err(AnalysisError::parameter(
                "bollinger_k",
                ind.bollinger_k,
                "must be a positive number",
            ));
        }

        let det = &self.detection;
        if !(0.0 < det.rsi_oversold && det.rsi_oversold < det.rsi_overbought
            && det.rsi_overbought < 100.0)
        {
            return Err(AnalysisError::parameter(
                "rsi_oversold/rsi_overbought",
                det.rsi_oversold,
                "must satisfy 0 < oversold < overbought < 100",
            ));
        }
        if !det.rsi_strength_span.is_finite() || det.rsi_strength_span <= 0.0 {
            return Err(AnalysisError::parameter(
                "rsi_strength_span",
                det.rsi_strength_span,
                "must be a positive number",
            ));
        }
        require_period("swing_window", det.swing_window)?;
        for pair in &det.ma_pairs {
            require_period("ma_pair.short", pair.short.period)?;
            require_period("ma_pair.long", pair.long.period)?;
            if pair.long.period <= pair.short.period {
                return Err(AnalysisError::parameter(
                    "ma_pair.long",
                    pair.long.period as f64,
                    "must exceed the short period",
                ));
            }
        }
        if !det.level_tolerance_pct.is_finite() || det.level_tolerance_pct <= 0.0 {
            return Err(AnalysisError::parameter(
                "level_tolerance_pct",
                det.level_tolerance_pct,
                "must be a positive fraction",
            ));
        }
        if !det.flat_tolerance_pct.is_finite() || det.flat_tolerance_pct < 0.0 {
            return Err(AnalysisError::parameter(
                "flat_tolerance_pct",
                det.flat_tolerance_pct,
                "must be non-negative",
            ));
        }
        for (name, period) in [
            ("trend_ema_short", det.trend_ema_short),
            ("trend_ema_long", det.trend_ema_long),
            ("trend_sma_mid", det.trend_sma_mid),
            ("trend_sma_long", det.trend_sma_long),
        ] {
            require_period(name, period)?;
        }

        let syn = &self.synthesis;
        syn.weights.validate()?;
        require_period("lookback_bars", syn.lookback_bars)?;
        require_period("min_bars", syn.min_bars)?;
        if !syn.buy_threshold.is_finite() || syn.buy_threshold <= 0.0 {
            return Err(AnalysisError::parameter(
                "buy_threshold",
                syn.buy_threshold,
                "must be positive",
            ));
        }
        if !syn.sell_threshold.is_finite() || syn.sell_threshold >= 0.0 {
            return Err(AnalysisError::parameter(
                "sell_threshold",
                syn.sell_threshold,
                "must be negative",
            ));
        }
        for (name, multiple) in [
            ("stop_loss_atr", syn.stop_loss_atr),
            ("take_profit_atr", syn.take_profit_atr),
        ] {
            if !multiple.is_finite() || multiple <= 0.0 {
                return Err(AnalysisError::parameter(
                    name,
                    multiple,
                    "must be a positive number",
                ));
            }
        }
        Ok(())
    }
}

fn require_period(name: &'static str, period: usize) -> Result<(), AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::parameter(
            name,
            period as f64,
            "must be at least 1",
        ));
    }
    Ok(())
}
