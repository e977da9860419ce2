//! Unit tests for the shared math primitives

use tactix::common::math::{
    ema_over_defined, ema_series, rolling_std_series, sma_over_defined, sma_series, true_range,
    wilder_series,
};

#[test]
fn sma_aligns_and_fills_window() {
    let out = sma_series(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn sma_short_input_is_all_undefined() {
    assert!(sma_series(&[1.0, 2.0], 3).iter().all(Option::is_none));
    assert!(sma_series(&[1.0, 2.0], 0).iter().all(Option::is_none));
}

#[test]
fn ema_is_sma_seeded() {
    let out = ema_series(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn ema_of_constant_input_is_constant() {
    let out = ema_series(&[7.0; 10], 4);
    for v in out.iter().skip(3) {
        assert_eq!(*v, Some(7.0));
    }
}

#[test]
fn rolling_std_is_population() {
    let out = rolling_std_series(&[1.0, 2.0, 3.0], 3);
    let expected = (2.0f64 / 3.0).sqrt();
    assert!((out[2].unwrap() - expected).abs() < 1e-12);
}

#[test]
fn wilder_seeds_with_simple_average() {
    let out = wilder_series(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(out[0], None);
    assert_eq!(out[1], Some(1.5));
    assert!((out[2].unwrap() - 2.25).abs() < 1e-12);
    assert!((out[3].unwrap() - 3.125).abs() < 1e-12);
}

#[test]
fn true_range_takes_the_largest_leg() {
    assert_eq!(true_range(10.0, 8.0, 9.0), 2.0);
    assert_eq!(true_range(10.0, 8.0, 12.0), 4.0);
    assert_eq!(true_range(10.0, 8.0, 5.0), 5.0);
}

#[test]
fn over_defined_variants_preserve_leading_gap() {
    let line = vec![None, Some(1.0), Some(2.0), Some(3.0)];
    assert_eq!(
        sma_over_defined(&line, 2),
        vec![None, None, Some(1.5), Some(2.5)]
    );
    assert_eq!(
        ema_over_defined(&line, 2),
        vec![None, None, Some(1.5), Some(2.5)]
    );
}

#[test]
fn over_defined_on_fully_undefined_line() {
    let line: Vec<Option<f64>> = vec![None, None, None];
    assert!(sma_over_defined(&line, 2).iter().all(Option::is_none));
}
