//! Unit tests for swing points and RSI divergence

use chrono::NaiveDate;
use tactix::config::DetectionConfig;
use tactix::models::price::{PriceBar, PriceSeries};
use tactix::models::series::IndicatorSeries;
use tactix::models::signal::{SignalDetails, SignalKind};
use tactix::signals::divergence::{
    rsi_divergence_events, swing_high_indices, swing_low_indices,
};

fn date(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(date(i as i64), close, close + 0.25, close - 0.25, close, 1_000)
        })
        .collect();
    PriceSeries::from_bars(bars).unwrap()
}

fn narrow_config() -> DetectionConfig {
    DetectionConfig {
        swing_window: 2,
        ..DetectionConfig::default()
    }
}

#[test]
fn swing_highs_need_a_full_window_on_both_sides() {
    let closes = [1.0, 2.0, 5.0, 2.0, 1.0, 1.0, 1.0, 4.0, 1.0, 1.0, 1.0];
    assert_eq!(swing_high_indices(&closes, 2), vec![2, 7]);
}

#[test]
fn swing_lows_mirror_swing_highs() {
    let closes = [5.0, 4.0, 1.0, 4.0, 5.0, 5.0, 5.0, 0.5, 5.0, 5.0, 5.0];
    assert_eq!(swing_low_indices(&closes, 2), vec![2, 7]);
}

#[test]
fn too_short_input_has_no_swings() {
    assert!(swing_high_indices(&[1.0, 2.0, 1.0], 2).is_empty());
}

#[test]
fn bearish_divergence_at_the_second_swing_high() {
    let closes = [1.0, 2.0, 5.0, 2.0, 1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0];
    let series = series_from_closes(&closes);
    let mut rsi_values = vec![Some(50.0); closes.len()];
    rsi_values[2] = Some(80.0);
    rsi_values[7] = Some(60.0);
    let rsi = IndicatorSeries::new(rsi_values);

    let events = rsi_divergence_events(&series, &rsi, &narrow_config());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::RsiBearishDivergence);
    assert_eq!(events[0].date, date(7));
    assert_eq!(events[0].strength, 1.0);
    match &events[0].details {
        SignalDetails::RsiDivergence {
            first_date,
            first_rsi,
            second_rsi,
            ..
        } => {
            assert_eq!(*first_date, date(2));
            assert_eq!(*first_rsi, 80.0);
            assert_eq!(*second_rsi, 60.0);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn bullish_divergence_at_the_second_swing_low() {
    let closes = [5.0, 4.0, 1.0, 4.0, 5.0, 5.0, 5.0, 0.5, 5.0, 5.0, 5.0];
    let series = series_from_closes(&closes);
    let mut rsi_values = vec![Some(50.0); closes.len()];
    rsi_values[2] = Some(20.0);
    rsi_values[7] = Some(35.0);
    let rsi = IndicatorSeries::new(rsi_values);

    let events = rsi_divergence_events(&series, &rsi, &narrow_config());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::RsiBullishDivergence);
    assert_eq!(events[0].date, date(7));
}

#[test]
fn agreeing_swings_are_not_divergence() {
    // Higher high in price with a higher RSI high: momentum confirms.
    let closes = [1.0, 2.0, 5.0, 2.0, 1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0];
    let series = series_from_closes(&closes);
    let mut rsi_values = vec![Some(50.0); closes.len()];
    rsi_values[2] = Some(60.0);
    rsi_values[7] = Some(80.0);
    let rsi = IndicatorSeries::new(rsi_values);

    assert!(rsi_divergence_events(&series, &rsi, &narrow_config()).is_empty());
}

#[test]
fn a_single_swing_is_not_comparable() {
    let closes = [1.0, 2.0, 5.0, 2.0, 1.0];
    let series = series_from_closes(&closes);
    let rsi = IndicatorSeries::new(vec![Some(50.0); closes.len()]);
    assert!(rsi_divergence_events(&series, &rsi, &narrow_config()).is_empty());
}

#[test]
fn swings_without_rsi_are_skipped() {
    let closes = [1.0, 2.0, 5.0, 2.0, 1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0];
    let series = series_from_closes(&closes);
    // RSI undefined at the first swing high: only one comparable swing left.
    let mut rsi_values = vec![Some(50.0); closes.len()];
    rsi_values[2] = None;
    rsi_values[7] = Some(60.0);
    let rsi = IndicatorSeries::new(rsi_values);

    assert!(rsi_divergence_events(&series, &rsi, &narrow_config()).is_empty());
}
