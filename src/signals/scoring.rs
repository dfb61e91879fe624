//! Confidence bounds and score-to-trend mapping shared by the policies

use crate::common::math;
use crate::models::signal::{TradeSignal, Trend};
use serde::Serialize;

/// Inclusive range a policy's confidence is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBounds {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, confidence: f64) -> f64 {
        if confidence.is_nan() {
            return self.min;
        }
        math::clamp(confidence, self.min, self.max)
    }

    pub fn contains(&self, confidence: f64) -> bool {
        confidence >= self.min && confidence <= self.max
    }
}

/// Map a score's sign to a trend: positive is up, negative is down
pub fn trend_from_score(score: f64) -> Trend {
    if score > 0.0 {
        Trend::Up
    } else if score < 0.0 {
        Trend::Down
    } else {
        Trend::Sideways
    }
}

pub fn signal_for_trend(trend: Trend) -> TradeSignal {
    match trend {
        Trend::Up => TradeSignal::Buy,
        Trend::Down => TradeSignal::Sell,
        Trend::Sideways => TradeSignal::Wait,
    }
}
