//! Additive point score: every rule adds or subtracts fixed points.

use crate::indicators::trend::compare_emas;
use crate::indicators::volume::is_volume_expanding;
use crate::models::indicators::{IndicatorSet, MacdState};
use crate::models::signal::SignalReason;
use crate::signals::policy::{Assessment, Scorer};
use crate::signals::scoring::{signal_for_trend, trend_from_score, ConfidenceBounds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveWeights {
    pub ema_cross: f64,
    pub macd_cross: f64,
    pub volume_expansion: f64,
    pub rsi_extreme: f64,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// |score| that maps to 100% before clamping
    pub full_scale: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for AdditiveWeights {
    fn default() -> Self {
        Self {
            ema_cross: 1.0,
            macd_cross: 1.0,
            volume_expansion: 1.0,
            rsi_extreme: 2.0,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            full_scale: 5.0,
            min_confidence: 55.0,
            max_confidence: 95.0,
        }
    }
}

impl AdditiveWeights {
    pub fn new(
        ema_cross: f64,
        macd_cross: f64,
        volume_expansion: f64,
        rsi_extreme: f64,
    ) -> Result<Self, String> {
        if ema_cross < 0.0 || macd_cross < 0.0 || volume_expansion < 0.0 || rsi_extreme < 0.0 {
            return Err("All weights must be non-negative".to_string());
        }
        Ok(Self {
            ema_cross,
            macd_cross,
            volume_expansion,
            rsi_extreme,
            ..Self::default()
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdditivePolicy {
    pub weights: AdditiveWeights,
}

impl AdditivePolicy {
    pub fn new(weights: AdditiveWeights) -> Self {
        Self { weights }
    }

    /// Raw point total before any confidence mapping
    pub fn score(&self, indicators: &IndicatorSet) -> (f64, Vec<SignalReason>) {
        let w = &self.weights;
        let mut score = 0.0;
        let mut reasons = Vec::new();

        match compare_emas(indicators.ema_fast.value, indicators.ema_slow.value) {
            1 => {
                score += w.ema_cross;
                reasons.push(reason("EMA20 above EMA50", w.ema_cross));
            }
            -1 => {
                score -= w.ema_cross;
                reasons.push(reason("EMA20 below EMA50", -w.ema_cross));
            }
            _ => {}
        }

        match indicators.macd.state {
            MacdState::Bullish => {
                score += w.macd_cross;
                reasons.push(reason("MACD above signal", w.macd_cross));
            }
            MacdState::Bearish => {
                score -= w.macd_cross;
                reasons.push(reason("MACD below signal", -w.macd_cross));
            }
            MacdState::Neutral => {}
        }

        if is_volume_expanding(&indicators.volume) {
            score += w.volume_expansion;
            reasons.push(reason("Volume above its average", w.volume_expansion));
        }

        let rsi = indicators.rsi.value;
        if rsi < w.rsi_oversold {
            score += w.rsi_extreme;
            reasons.push(reason(&format!("RSI oversold: {:.2}", rsi), w.rsi_extreme));
        } else if rsi > w.rsi_overbought {
            score -= w.rsi_extreme;
            reasons.push(reason(&format!("RSI overbought: {:.2}", rsi), -w.rsi_extreme));
        }

        (score, reasons)
    }
}

impl Scorer for AdditivePolicy {
    fn name(&self) -> &'static str {
        "additive"
    }

    fn bounds(&self) -> ConfidenceBounds {
        ConfidenceBounds::new(self.weights.min_confidence, self.weights.max_confidence)
    }

    fn assess(&self, indicators: &IndicatorSet) -> Assessment {
        let (score, reasons) = self.score(indicators);
        let trend = trend_from_score(score);
        let raw_confidence = if self.weights.full_scale > 0.0 {
            score.abs() / self.weights.full_scale * 100.0
        } else {
            0.0
        };

        Assessment {
            trend,
            signal: Some(signal_for_trend(trend)),
            confidence: self.bounds().clamp(raw_confidence),
            reasons,
        }
    }
}

fn reason(description: &str, weight: f64) -> SignalReason {
    SignalReason {
        description: description.to_string(),
        weight,
    }
}
