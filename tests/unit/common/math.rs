//! Unit tests for the rolling statistics helpers

use trendcast::common::math::{clamp, deltas, ema, ema_alpha, ema_series, sma};

#[test]
fn ema_alpha_matches_span_formula() {
    assert!((ema_alpha(20) - 2.0 / 21.0).abs() < 1e-12);
    assert!((ema_alpha(9) - 0.2).abs() < 1e-12);
}

#[test]
fn ema_series_is_seeded_by_first_value() {
    let series = ema_series(&[10.0, 20.0, 30.0], 3);
    assert_eq!(series.len(), 3);
    assert_eq!(series[0], 10.0);
    // alpha = 0.5
    assert!((series[1] - 15.0).abs() < 1e-12);
    assert!((series[2] - 22.5).abs() < 1e-12);
}

#[test]
fn ema_series_handles_empty_input() {
    assert!(ema_series(&[], 5).is_empty());
    assert!(ema(&[], 5).is_none());
}

#[test]
fn ema_of_constant_is_exactly_constant() {
    let values = vec![37.25; 200];
    for period in [2, 9, 12, 20, 26, 50] {
        assert_eq!(ema(&values, period), Some(37.25));
    }
}

#[test]
fn ema_converges_after_level_shift() {
    let mut values = vec![10.0; 10];
    values.extend(vec![50.0; 300]);
    let last = ema(&values, 20).unwrap();
    assert!((last - 50.0).abs() < 1e-6);
}

#[test]
fn sma_uses_trailing_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&values, 2), Some(4.5));
    assert_eq!(sma(&values, 5), Some(3.0));
    assert_eq!(sma(&values, 6), None);
    assert_eq!(sma(&values, 0), None);
}

#[test]
fn deltas_are_first_differences() {
    assert_eq!(deltas(&[1.0, 4.0, 2.0]), vec![3.0, -2.0]);
    assert!(deltas(&[1.0]).is_empty());
}

#[test]
fn clamp_bounds_value() {
    assert_eq!(clamp(120.0, 55.0, 95.0), 95.0);
    assert_eq!(clamp(10.0, 55.0, 95.0), 55.0);
    assert_eq!(clamp(60.0, 55.0, 95.0), 60.0);
}
