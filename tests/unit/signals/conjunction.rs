//! Unit tests for the threshold-conjunction policy

use crate::fixtures::indicator_set;
use trendcast::models::indicators::MacdState;
use trendcast::models::signal::{TradeSignal, Trend};
use trendcast::signals::{ConjunctionPolicy, Scorer};

#[test]
fn agreeing_bullish_conditions_buy() {
    let set = indicator_set(65.0, 110.0, 100.0, MacdState::Bullish, 1000.0, 1000.0);
    let assessment = ConjunctionPolicy::default().assess(&set);
    assert_eq!(assessment.trend, Trend::Up);
    assert_eq!(assessment.signal, Some(TradeSignal::Buy));
    assert_eq!(assessment.confidence, 70.0);
    assert_eq!(assessment.reasons.len(), 3);
}

#[test]
fn agreeing_bearish_conditions_sell() {
    let set = indicator_set(35.0, 90.0, 100.0, MacdState::Bearish, 1000.0, 1000.0);
    let assessment = ConjunctionPolicy::default().assess(&set);
    assert_eq!(assessment.trend, Trend::Down);
    assert_eq!(assessment.signal, Some(TradeSignal::Sell));
    assert_eq!(assessment.confidence, 70.0);
}

#[test]
fn confidence_is_capped() {
    let set = indicator_set(95.0, 110.0, 100.0, MacdState::Bullish, 1000.0, 1000.0);
    assert_eq!(ConjunctionPolicy::default().assess(&set).confidence, 85.0);
}

#[test]
fn disagreement_waits_at_baseline() {
    let policy = ConjunctionPolicy::default();
    let cases = [
        indicator_set(65.0, 90.0, 100.0, MacdState::Bullish, 1000.0, 1000.0),
        indicator_set(65.0, 110.0, 100.0, MacdState::Neutral, 1000.0, 1000.0),
        indicator_set(35.0, 90.0, 100.0, MacdState::Bullish, 1000.0, 1000.0),
        indicator_set(50.0, 110.0, 100.0, MacdState::Bullish, 1000.0, 1000.0),
    ];
    for set in cases {
        let assessment = policy.assess(&set);
        assert_eq!(assessment.trend, Trend::Sideways);
        assert_eq!(assessment.signal, Some(TradeSignal::Wait));
        assert_eq!(assessment.confidence, 55.0);
    }
}
