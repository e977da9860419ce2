//! Unit tests for configuration validation

use tactix::config::AnalysisConfig;
use tactix::error::AnalysisError;

#[test]
fn default_config_validates() {
    assert!(AnalysisConfig::default().validate().is_ok());
}

#[test]
fn zero_period_is_rejected() {
    let mut config = AnalysisConfig::default();
    config.indicators.rsi_period = 0;
    assert!(matches!(
        config.validate().unwrap_err(),
        AnalysisError::ParameterOutOfRange { .. }
    ));
}

#[test]
fn slow_must_exceed_fast() {
    let mut config = AnalysisConfig::default();
    config.indicators.macd_slow = config.indicators.macd_fast;
    assert!(config.validate().is_err());
}

#[test]
fn weight_above_one_is_rejected() {
    let mut config = AnalysisConfig::default();
    config.synthesis.weights.divergence = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn buy_threshold_must_be_positive() {
    let mut config = AnalysisConfig::default();
    config.synthesis.buy_threshold = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn sell_threshold_must_be_negative() {
    let mut config = AnalysisConfig::default();
    config.synthesis.sell_threshold = 0.2;
    assert!(config.validate().is_err());
}

#[test]
fn inverted_rsi_thresholds_are_rejected() {
    let mut config = AnalysisConfig::default();
    config.detection.rsi_oversold = 80.0;
    assert!(config.validate().is_err());
}

#[test]
fn ma_pair_long_must_exceed_short() {
    use tactix::models::signal::{MaPair, MaSpec};
    let mut config = AnalysisConfig::default();
    config.detection.ma_pairs = vec![MaPair::new(MaSpec::sma(50), MaSpec::sma(50))];
    assert!(config.validate().is_err());
}
