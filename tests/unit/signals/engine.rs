//! Unit tests for signal engine

use crate::fixtures::rising_candles;
use trendcast::indicators::IndicatorError;
use trendcast::signals::engine::MIN_CANDLES;
use trendcast::signals::{AdditivePolicy, AdditiveWeights, ScoringPolicy, SignalEngine};

#[test]
fn test_evaluate_insufficient_data() {
    let candles = rising_candles(10);
    let result = SignalEngine::evaluate("BTC", &candles, ScoringPolicy::default());
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            actual: 10
        })
    ));
}

#[test]
fn test_evaluate_sufficient_data() {
    let candles = rising_candles(120);
    let verdict = SignalEngine::evaluate("AAPL", &candles, ScoringPolicy::Additive).unwrap();
    assert_eq!(verdict.symbol, "AAPL");
    assert_eq!(verdict.policy, "additive");
    assert_eq!(verdict.price, 219.0);
    assert!(verdict.confidence >= 55.0 && verdict.confidence <= 95.0);

    let indicators = verdict.indicators.expect("snapshot attached");
    assert_eq!(indicators.symbol, "AAPL");
    assert_eq!(indicators.price, verdict.price);
}

#[test]
fn test_evaluate_with_custom_scorer() {
    let weights = AdditiveWeights {
        rsi_extreme: 0.0,
        ..AdditiveWeights::default()
    };
    let scorer = AdditivePolicy::new(weights);
    let verdict = SignalEngine::evaluate_with("AAPL", &rising_candles(60), &scorer).unwrap();
    // EMA, MACD and volume all vote up; saturated RSI carries no weight
    assert!((verdict.confidence - 60.0).abs() < 1e-9);
    assert_eq!(verdict.reasons.len(), 4);
}

#[test]
fn test_each_policy_names_itself() {
    let candles = rising_candles(60);
    for policy in ScoringPolicy::all() {
        let verdict = SignalEngine::evaluate("AAPL", &candles, policy).unwrap();
        assert_eq!(verdict.policy, policy.name());
    }
}
