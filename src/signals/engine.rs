//! Signal engine: indicators first, then the selected scoring policy.

use crate::indicators::{compute_indicator_set, IndicatorError};
use crate::models::indicators::{Candle, IndicatorSet};
use crate::models::signal::Verdict;
use crate::signals::policy::{Scorer, ScoringPolicy};
use chrono::Utc;
use tracing::debug;

pub use crate::indicators::MIN_CANDLES;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate candles for a symbol with one of the built-in policies
    pub fn evaluate(
        symbol: &str,
        candles: &[Candle],
        policy: ScoringPolicy,
    ) -> Result<Verdict, IndicatorError> {
        let scorer = policy.scorer();
        Self::evaluate_with(symbol, candles, scorer.as_ref())
    }

    /// Evaluate candles with a caller-configured scorer
    pub fn evaluate_with(
        symbol: &str,
        candles: &[Candle],
        scorer: &dyn Scorer,
    ) -> Result<Verdict, IndicatorError> {
        let indicators = compute_indicator_set(symbol, candles)?;
        Ok(Self::score(indicators, scorer))
    }

    /// Apply a scorer to an already computed snapshot
    pub fn score(indicators: IndicatorSet, scorer: &dyn Scorer) -> Verdict {
        let assessment = scorer.assess(&indicators);

        debug!(
            symbol = %indicators.symbol,
            policy = scorer.name(),
            trend = assessment.trend.as_str(),
            confidence = assessment.confidence,
            rsi = indicators.rsi.value,
            "SignalEngine: scored {}",
            indicators.symbol
        );

        Verdict {
            symbol: indicators.symbol.clone(),
            trend: assessment.trend,
            signal: assessment.signal,
            confidence: assessment.confidence,
            policy: scorer.name().to_string(),
            price: indicators.price,
            reasons: assessment.reasons,
            indicators: Some(indicators),
            timestamp: Utc::now(),
        }
    }
}
