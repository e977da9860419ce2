//! Unit tests for bar validation and series ingestion

use chrono::NaiveDate;
use tactix::error::AnalysisError;
use tactix::models::price::{PriceBar, PriceSeries};

fn date(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn bar(offset: i64, open: f64, high: f64, low: f64, close: f64) -> PriceBar {
    PriceBar::new(date(offset), open, high, low, close, 1_000)
}

#[test]
fn valid_series_is_accepted() {
    let series = PriceSeries::from_bars(vec![
        bar(0, 10.0, 10.5, 9.5, 10.2),
        bar(1, 10.2, 10.8, 10.0, 10.6),
    ])
    .unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.last().unwrap().close, 10.6);
    assert_eq!(series.index_of(date(1)), Some(1));
    assert_eq!(series.index_of(date(2)), None);
}

#[test]
fn low_above_open_is_rejected() {
    let err = PriceSeries::from_bars(vec![bar(0, 10.0, 11.0, 10.5, 10.8)]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidBar { .. }));
}

#[test]
fn high_below_close_is_rejected() {
    let err = PriceSeries::from_bars(vec![bar(0, 10.0, 10.2, 9.0, 10.5)]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidBar { .. }));
}

#[test]
fn non_positive_price_is_rejected() {
    let err = PriceSeries::from_bars(vec![bar(0, 0.0, 10.0, 0.0, 5.0)]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidBar { .. }));
}

#[test]
fn non_finite_price_is_rejected() {
    let err = PriceSeries::from_bars(vec![bar(0, 10.0, 10.5, 9.5, f64::NAN)]).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidBar { .. }));
}

#[test]
fn duplicate_dates_are_rejected() {
    let err = PriceSeries::from_bars(vec![
        bar(0, 10.0, 10.5, 9.5, 10.2),
        bar(0, 10.2, 10.8, 10.0, 10.6),
    ])
    .unwrap_err();
    assert!(matches!(err, AnalysisError::OutOfOrder { .. }));
}

#[test]
fn descending_dates_are_rejected() {
    let err = PriceSeries::from_bars(vec![
        bar(5, 10.0, 10.5, 9.5, 10.2),
        bar(3, 10.2, 10.8, 10.0, 10.6),
    ])
    .unwrap_err();
    assert!(matches!(err, AnalysisError::OutOfOrder { .. }));
}

#[test]
fn empty_series_is_fine() {
    let series = PriceSeries::from_bars(Vec::new()).unwrap();
    assert!(series.is_empty());
    assert!(series.last().is_none());
}
