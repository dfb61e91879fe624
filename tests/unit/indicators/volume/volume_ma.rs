//! Unit tests for the volume moving average

use crate::fixtures::{candles_from, rising_candles};
use trendcast::indicators::volume::{calculate_volume_ma, is_volume_expanding};

#[test]
fn test_volume_ma_trailing_average() {
    let volumes: Vec<f64> = (1..=30).map(|v| v as f64).collect();
    let candles = candles_from(&vec![100.0; 30], &volumes);
    let volume = calculate_volume_ma(&candles, 20).unwrap();
    assert_eq!(volume.volume, 30.0);
    assert!((volume.volume_ma - 20.5).abs() < 1e-12);
    assert_eq!(volume.volume_ma_period, 20);
    assert!(is_volume_expanding(&volume));
}

#[test]
fn test_volume_ma_insufficient_data() {
    assert!(calculate_volume_ma(&rising_candles(19), 20).is_none());
    assert!(calculate_volume_ma(&[], 20).is_none());
}

#[test]
fn test_flat_volume_is_not_expanding() {
    let candles = candles_from(&vec![100.0; 25], &vec![500.0; 25]);
    let volume = calculate_volume_ma(&candles, 20).unwrap();
    assert!(!is_volume_expanding(&volume));
}
