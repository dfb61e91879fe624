//! Weighted trend score: EMA ordering and RSI bands, mapped onto UP/DOWN/SIDEWAYS.

use crate::indicators::trend::compare_emas;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::{SignalReason, Trend};
use crate::signals::policy::{Assessment, Scorer};
use crate::signals::scoring::ConfidenceBounds;

/// Scores EMA ordering (±`ema_weight`) and RSI bands (±`rsi_weight`), then maps
/// the total onto a trend once it clears `trend_threshold`.
///
/// EMA20 equal to EMA50 adds nothing rather than counting as a bearish -30,
/// matching how the other policies treat a tie.
#[derive(Debug, Clone)]
pub struct TrendScorePolicy {
    pub ema_weight: f64,
    pub rsi_weight: f64,
    pub rsi_bullish: f64,
    pub rsi_bearish: f64,
    /// |score| must exceed this to leave SIDEWAYS
    pub trend_threshold: f64,
}

impl Default for TrendScorePolicy {
    fn default() -> Self {
        Self {
            ema_weight: 30.0,
            rsi_weight: 25.0,
            rsi_bullish: 60.0,
            rsi_bearish: 40.0,
            trend_threshold: 20.0,
        }
    }
}

impl Scorer for TrendScorePolicy {
    fn name(&self) -> &'static str {
        "trend_score"
    }

    fn bounds(&self) -> ConfidenceBounds {
        ConfidenceBounds::new(0.0, 100.0)
    }

    fn assess(&self, indicators: &IndicatorSet) -> Assessment {
        let mut score = 0.0;
        let mut reasons = Vec::new();

        let ema_vote = compare_emas(indicators.ema_fast.value, indicators.ema_slow.value) as f64;
        if ema_vote != 0.0 {
            score += ema_vote * self.ema_weight;
            reasons.push(SignalReason {
                description: format!(
                    "EMA20 {} EMA50",
                    if ema_vote > 0.0 { "above" } else { "below" }
                ),
                weight: ema_vote * self.ema_weight,
            });
        }

        let rsi = indicators.rsi.value;
        if rsi > self.rsi_bullish {
            score += self.rsi_weight;
            reasons.push(SignalReason {
                description: format!("RSI strong: {:.2}", rsi),
                weight: self.rsi_weight,
            });
        } else if rsi < self.rsi_bearish {
            score -= self.rsi_weight;
            reasons.push(SignalReason {
                description: format!("RSI weak: {:.2}", rsi),
                weight: -self.rsi_weight,
            });
        }

        let trend = if score > self.trend_threshold {
            Trend::Up
        } else if score < -self.trend_threshold {
            Trend::Down
        } else {
            Trend::Sideways
        };

        Assessment {
            trend,
            signal: None,
            confidence: self.bounds().clamp(score.abs()),
            reasons,
        }
    }
}
