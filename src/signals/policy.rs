//! Policy selection and the common scorer interface

use crate::models::indicators::IndicatorSet;
use crate::models::signal::{SignalReason, TradeSignal, Trend};
use crate::signals::additive::AdditivePolicy;
use crate::signals::conjunction::ConjunctionPolicy;
use crate::signals::scoring::ConfidenceBounds;
use crate::signals::trend_score::TrendScorePolicy;
use serde::{Deserialize, Serialize};

/// Result of applying one policy to one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub trend: Trend,
    pub signal: Option<TradeSignal>,
    pub confidence: f64,
    pub reasons: Vec<SignalReason>,
}

/// A fixed, ordered set of threshold rules over an [`IndicatorSet`]
pub trait Scorer {
    fn name(&self) -> &'static str;

    fn bounds(&self) -> ConfidenceBounds;

    fn assess(&self, indicators: &IndicatorSet) -> Assessment;
}

/// Built-in policies, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    Additive,
    #[default]
    Conjunction,
    TrendScore,
}

impl ScoringPolicy {
    pub fn all() -> [ScoringPolicy; 3] {
        [
            ScoringPolicy::Additive,
            ScoringPolicy::Conjunction,
            ScoringPolicy::TrendScore,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "additive" | "points" => Some(ScoringPolicy::Additive),
            "conjunction" | "threshold" => Some(ScoringPolicy::Conjunction),
            "trend_score" | "trend" => Some(ScoringPolicy::TrendScore),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScoringPolicy::Additive => "additive",
            ScoringPolicy::Conjunction => "conjunction",
            ScoringPolicy::TrendScore => "trend_score",
        }
    }

    /// Default-configured scorer for this policy
    pub fn scorer(&self) -> Box<dyn Scorer + Send + Sync> {
        match self {
            ScoringPolicy::Additive => Box::new(AdditivePolicy::default()),
            ScoringPolicy::Conjunction => Box::new(ConjunctionPolicy::default()),
            ScoringPolicy::TrendScore => Box::new(TrendScorePolicy::default()),
        }
    }

    pub fn bounds(&self) -> ConfidenceBounds {
        self.scorer().bounds()
    }
}
