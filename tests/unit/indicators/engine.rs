//! Unit tests for the indicator engine

use crate::fixtures::{candles_from, constant_candles, rising_candles};
use trendcast::indicators::{compute_indicator_set, IndicatorError, MIN_CANDLES};
use trendcast::models::indicators::{MacdState, RsiCondition};

#[test]
fn test_insufficient_data_is_reported() {
    let err = compute_indicator_set("AAPL", &rising_candles(49)).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            actual: 49
        }
    );
    assert_eq!(err.kind(), "insufficient_data");
}

#[test]
fn test_empty_input_is_insufficient() {
    let err = compute_indicator_set("AAPL", &[]).unwrap_err();
    assert!(matches!(err, IndicatorError::InsufficientData { actual: 0, .. }));
}

#[test]
fn test_minimum_history_is_enough() {
    let set = compute_indicator_set("AAPL", &rising_candles(MIN_CANDLES)).unwrap();
    assert_eq!(set.symbol, "AAPL");
    assert_eq!(set.price, 149.0);
    assert_eq!(set.ema_fast.period, 20);
    assert_eq!(set.ema_slow.period, 50);
}

#[test]
fn test_constant_series_snapshot() {
    let set = compute_indicator_set("FLAT", &constant_candles(60, 100.0)).unwrap();
    assert_eq!(set.ema_fast.value, 100.0);
    assert_eq!(set.ema_slow.value, 100.0);
    assert_eq!(set.rsi.value, 50.0);
    assert_eq!(set.rsi.condition, RsiCondition::Flat);
    assert_eq!(set.macd.state, MacdState::Neutral);
    assert_eq!(set.volume.volume, set.volume.volume_ma);
}

#[test]
fn test_non_finite_close_is_degenerate() {
    let mut candles = rising_candles(60);
    candles[30].close = f64::NAN;
    let err = compute_indicator_set("BAD", &candles).unwrap_err();
    assert!(matches!(err, IndicatorError::ComputationDegenerate(_)));
    assert_eq!(err.kind(), "computation_degenerate");
}

#[test]
fn test_negative_volume_is_degenerate() {
    let mut candles = rising_candles(60);
    candles[59].volume = -1.0;
    assert!(matches!(
        compute_indicator_set("BAD", &candles),
        Err(IndicatorError::ComputationDegenerate(_))
    ));
}

#[test]
fn test_overflowing_prices_are_degenerate() {
    let mut closes = vec![f64::MAX; 60];
    closes[59] = -f64::MAX;
    let candles = candles_from(&closes, &vec![1.0; 60]);
    assert!(matches!(
        compute_indicator_set("HUGE", &candles),
        Err(IndicatorError::ComputationDegenerate(_))
    ));
}

#[test]
fn test_snapshot_is_causal() {
    let candles = rising_candles(80);
    let prefix = compute_indicator_set("AAPL", &candles[..60]).unwrap();

    let mut altered = candles.clone();
    for candle in altered.iter_mut().skip(60) {
        candle.close = 1.0;
        candle.volume = 1.0;
    }
    let altered_prefix = compute_indicator_set("AAPL", &altered[..60]).unwrap();

    assert_eq!(prefix.values(), altered_prefix.values());
    assert_eq!(prefix.timestamp, candles[59].timestamp);
}
