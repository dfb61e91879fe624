//! Unit tests for the additive point-score policy

use crate::fixtures::indicator_set;
use trendcast::models::indicators::MacdState;
use trendcast::models::signal::{TradeSignal, Trend};
use trendcast::signals::{AdditivePolicy, AdditiveWeights, Scorer};

#[test]
fn all_bullish_rules_hit_the_ceiling() {
    let policy = AdditivePolicy::default();
    let set = indicator_set(25.0, 110.0, 100.0, MacdState::Bullish, 2000.0, 1000.0);
    let (score, reasons) = policy.score(&set);
    assert_eq!(score, 5.0);
    assert_eq!(reasons.len(), 4);

    let assessment = policy.assess(&set);
    assert_eq!(assessment.trend, Trend::Up);
    assert_eq!(assessment.signal, Some(TradeSignal::Buy));
    assert_eq!(assessment.confidence, 95.0);
}

#[test]
fn bearish_rules_map_to_down() {
    let policy = AdditivePolicy::default();
    let set = indicator_set(75.0, 90.0, 100.0, MacdState::Bearish, 500.0, 1000.0);
    let assessment = policy.assess(&set);
    assert_eq!(policy.score(&set).0, -4.0);
    assert_eq!(assessment.trend, Trend::Down);
    assert_eq!(assessment.signal, Some(TradeSignal::Sell));
    assert!((assessment.confidence - 80.0).abs() < 1e-9);
}

#[test]
fn zero_score_is_sideways_at_floor() {
    let policy = AdditivePolicy::default();
    let set = indicator_set(50.0, 100.0, 100.0, MacdState::Neutral, 1000.0, 1000.0);
    let assessment = policy.assess(&set);
    assert_eq!(assessment.trend, Trend::Sideways);
    assert_eq!(assessment.signal, Some(TradeSignal::Wait));
    assert_eq!(assessment.confidence, 55.0);
    assert!(assessment.reasons.is_empty());
}

#[test]
fn small_score_is_clamped_to_floor() {
    let policy = AdditivePolicy::default();
    let set = indicator_set(50.0, 101.0, 100.0, MacdState::Neutral, 1000.0, 1000.0);
    let assessment = policy.assess(&set);
    assert_eq!(assessment.trend, Trend::Up);
    assert_eq!(assessment.confidence, 55.0);
}

#[test]
fn three_points_scale_linearly() {
    let policy = AdditivePolicy::default();
    let set = indicator_set(50.0, 101.0, 100.0, MacdState::Bullish, 1200.0, 1000.0);
    assert!((policy.assess(&set).confidence - 60.0).abs() < 1e-9);
}

#[test]
fn custom_weights_change_the_score() {
    let weights = AdditiveWeights::new(3.0, 1.0, 0.0, 2.0).unwrap();
    let policy = AdditivePolicy::new(weights);
    let set = indicator_set(50.0, 101.0, 100.0, MacdState::Neutral, 2000.0, 1000.0);
    assert_eq!(policy.score(&set).0, 3.0);
}

#[test]
fn negative_weights_are_rejected() {
    assert!(AdditiveWeights::new(-1.0, 1.0, 1.0, 2.0).is_err());
}

#[test]
fn bounds_are_declared() {
    let bounds = AdditivePolicy::default().bounds();
    assert_eq!((bounds.min, bounds.max), (55.0, 95.0));
}
