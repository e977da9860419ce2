//! Unit tests for the moving-average indicators

use chrono::NaiveDate;
use tactix::indicators::trend::{ema, sma};
use tactix::models::price::{PriceBar, PriceSeries};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                start + chrono::Duration::days(i as i64),
                close,
                close + 0.5,
                close - 0.5,
                close,
                1_000,
            )
        })
        .collect();
    PriceSeries::from_bars(bars).unwrap()
}

#[test]
fn sma_matches_hand_computation() {
    let out = sma(&series_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
    assert_eq!(
        out.values(),
        &[None, None, Some(2.0), Some(3.0), Some(4.0)]
    );
}

#[test]
fn ema_matches_hand_computation() {
    let out = ema(&series_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
    assert_eq!(
        out.values(),
        &[None, None, Some(2.0), Some(3.0), Some(4.0)]
    );
}

#[test]
fn insufficient_history_is_all_undefined() {
    let series = series_from_closes(&[10.0, 11.0, 12.0]);
    assert_eq!(sma(&series, 20).unwrap().defined_count(), 0);
    assert_eq!(ema(&series, 20).unwrap().defined_count(), 0);
}

#[test]
fn ema_reacts_faster_than_sma_in_a_rally() {
    let closes: Vec<f64> = (0..40)
        .map(|i| if i < 30 { 100.0 } else { 100.0 + (i - 29) as f64 * 2.0 })
        .collect();
    let series = series_from_closes(&closes);
    let ema_line = ema(&series, 10).unwrap();
    let sma_line = sma(&series, 10).unwrap();
    assert!(ema_line.last_defined().unwrap() > sma_line.last_defined().unwrap());
}

#[test]
fn zero_period_is_rejected() {
    let series = series_from_closes(&[10.0, 11.0, 12.0]);
    assert!(sma(&series, 0).is_err());
    assert!(ema(&series, 0).is_err());
}
