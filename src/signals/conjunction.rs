//! Threshold conjunction: act only when RSI, EMA ordering and MACD agree.

use crate::indicators::momentum::RSI_MIDLINE;
use crate::models::indicators::{IndicatorSet, MacdState};
use crate::models::signal::{SignalReason, TradeSignal, Trend};
use crate::signals::policy::{Assessment, Scorer};
use crate::signals::scoring::ConfidenceBounds;

#[derive(Debug, Clone)]
pub struct ConjunctionPolicy {
    pub rsi_midline: f64,
    /// Confidence reported when the conditions disagree
    pub baseline_confidence: f64,
    pub max_confidence: f64,
}

impl Default for ConjunctionPolicy {
    fn default() -> Self {
        Self {
            rsi_midline: RSI_MIDLINE,
            baseline_confidence: 55.0,
            max_confidence: 85.0,
        }
    }
}

impl Scorer for ConjunctionPolicy {
    fn name(&self) -> &'static str {
        "conjunction"
    }

    fn bounds(&self) -> ConfidenceBounds {
        ConfidenceBounds::new(self.baseline_confidence, self.max_confidence)
    }

    fn assess(&self, indicators: &IndicatorSet) -> Assessment {
        let rsi = indicators.rsi.value;
        let ema_fast = indicators.ema_fast.value;
        let ema_slow = indicators.ema_slow.value;
        let macd_state = indicators.macd.state;

        let bullish = rsi > self.rsi_midline && ema_fast > ema_slow && macd_state == MacdState::Bullish;
        let bearish = rsi < self.rsi_midline && ema_fast < ema_slow && macd_state == MacdState::Bearish;

        let (trend, signal) = if bullish {
            (Trend::Up, TradeSignal::Buy)
        } else if bearish {
            (Trend::Down, TradeSignal::Sell)
        } else {
            return Assessment {
                trend: Trend::Sideways,
                signal: Some(TradeSignal::Wait),
                confidence: self.baseline_confidence,
                reasons: Vec::new(),
            };
        };

        let distance = (rsi - self.rsi_midline).abs();
        let confidence = self.bounds().clamp(self.baseline_confidence + distance);

        Assessment {
            trend,
            signal: Some(signal),
            confidence,
            reasons: vec![
                SignalReason {
                    description: format!("RSI {:.2} vs midline {:.0}", rsi, self.rsi_midline),
                    weight: distance,
                },
                SignalReason {
                    description: format!("EMA20 {:.2} vs EMA50 {:.2}", ema_fast, ema_slow),
                    weight: ema_fast - ema_slow,
                },
                SignalReason {
                    description: format!("MACD {:?}", macd_state),
                    weight: indicators.macd.histogram,
                },
            ],
        }
    }
}
