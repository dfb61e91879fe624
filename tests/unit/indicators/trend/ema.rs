//! Unit tests for EMA indicator

use crate::fixtures::{constant_candles, falling_candles, rising_candles};
use trendcast::indicators::trend::{calculate_ema, compare_emas, EMA_FAST_PERIOD, EMA_SLOW_PERIOD};

#[test]
fn test_ema_insufficient_data() {
    let candles = rising_candles(10);
    assert!(calculate_ema(&candles, 20).is_none());
    assert!(calculate_ema(&candles, 0).is_none());
}

#[test]
fn test_ema_sufficient_data() {
    let candles = rising_candles(50);
    let ema = calculate_ema(&candles, EMA_FAST_PERIOD).unwrap();
    assert_eq!(ema.period, EMA_FAST_PERIOD);
    assert!(ema.value.is_finite());
    assert!(ema.value < 149.0, "EMA lags a rising series");
}

#[test]
fn test_ema_of_constant_series() {
    let candles = constant_candles(60, 100.0);
    assert_eq!(calculate_ema(&candles, 20).unwrap().value, 100.0);
    assert_eq!(calculate_ema(&candles, 50).unwrap().value, 100.0);
}

#[test]
fn test_fast_and_slow_ema_ordering() {
    let order = |candles: &[trendcast::models::indicators::Candle]| {
        let fast = calculate_ema(candles, EMA_FAST_PERIOD).unwrap();
        let slow = calculate_ema(candles, EMA_SLOW_PERIOD).unwrap();
        compare_emas(fast.value, slow.value)
    };
    assert_eq!(order(&rising_candles(60)), 1);
    assert_eq!(order(&falling_candles(60)), -1);
    assert_eq!(order(&constant_candles(60, 42.0)), 0);
    assert!(calculate_ema(&rising_candles(30), EMA_SLOW_PERIOD).is_none());
}

#[test]
fn test_compare_emas() {
    assert_eq!(compare_emas(2.0, 1.0), 1);
    assert_eq!(compare_emas(1.0, 2.0), -1);
    assert_eq!(compare_emas(1.0, 1.0), 0);
}
