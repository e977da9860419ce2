//! Unit tests for the stochastic oscillator

use chrono::NaiveDate;
use tactix::indicators::momentum::stochastic;
use tactix::models::price::{PriceBar, PriceSeries};

fn date(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn flat_series(count: usize) -> PriceSeries {
    let bars = (0..count)
        .map(|i| PriceBar::new(date(i as i64), 100.0, 100.0, 100.0, 100.0, 1_000))
        .collect();
    PriceSeries::from_bars(bars).unwrap()
}

/// Bars that always close at the window high: low one point under, high at
/// the close.
fn closing_on_highs(count: usize) -> PriceSeries {
    let bars = (0..count)
        .map(|i| {
            let close = (i + 10) as f64;
            PriceBar::new(date(i as i64), close - 0.5, close, close - 1.0, close, 1_000)
        })
        .collect();
    PriceSeries::from_bars(bars).unwrap()
}

#[test]
fn zero_range_emits_fifty() {
    let out = stochastic(&flat_series(20), 14, 3).unwrap();
    assert_eq!(out.percent_k.first_defined_index(), Some(13));
    for v in out.percent_k.values().iter().flatten() {
        assert_eq!(*v, 50.0);
    }
}

#[test]
fn closing_on_the_high_pins_percent_k_at_hundred() {
    let out = stochastic(&closing_on_highs(25), 14, 3).unwrap();
    for v in out.percent_k.values().iter().flatten() {
        assert!((v - 100.0).abs() < 1e-10);
    }
    for v in out.percent_d.values().iter().flatten() {
        assert!((v - 100.0).abs() < 1e-10);
    }
}

#[test]
fn percent_d_lags_percent_k_by_the_smoothing_window() {
    let out = stochastic(&closing_on_highs(25), 14, 3).unwrap();
    assert_eq!(out.percent_k.first_defined_index(), Some(13));
    assert_eq!(out.percent_d.first_defined_index(), Some(15));
}

#[test]
fn values_stay_in_bounds() {
    let bars = (0..40)
        .map(|i| {
            let close = 100.0 + ((i % 5) as f64 - 2.0) * 3.0;
            PriceBar::new(date(i as i64), close, close + 2.0, close - 2.0, close, 1_000)
        })
        .collect();
    let series = PriceSeries::from_bars(bars).unwrap();
    let out = stochastic(&series, 14, 3).unwrap();
    for v in out.percent_k.values().iter().flatten() {
        assert!((0.0..=100.0).contains(v));
    }
    for v in out.percent_d.values().iter().flatten() {
        assert!((0.0..=100.0).contains(v));
    }
}

#[test]
fn bad_parameters_are_rejected() {
    let series = flat_series(20);
    assert!(stochastic(&series, 0, 3).is_err());
    assert!(stochastic(&series, 14, 0).is_err());
}
