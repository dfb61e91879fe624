use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// Which branch of the RSI formula produced the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiCondition {
    /// Both gains and losses present in the window
    Normal,
    /// No price movement in the window; RSI pinned to 50
    Flat,
    /// Gains but no losses in the window; RSI pinned to 100
    Saturated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
    pub condition: RsiCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdState {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub state: MacdState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeIndicator {
    pub volume: f64,
    pub volume_ma: f64,
    pub volume_ma_period: u32,
}

/// Indicator values for the final candle of a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub price: f64,
    pub ema_fast: EmaIndicator,
    pub ema_slow: EmaIndicator,
    pub rsi: RsiIndicator,
    pub macd: MacdIndicator,
    pub volume: VolumeIndicator,
    pub timestamp: DateTime<Utc>,
}

impl IndicatorSet {
    /// Iterate over every numeric field, used to reject non-finite results
    pub fn values(&self) -> [f64; 9] {
        [
            self.price,
            self.ema_fast.value,
            self.ema_slow.value,
            self.rsi.value,
            self.macd.macd,
            self.macd.signal,
            self.macd.histogram,
            self.volume.volume,
            self.volume.volume_ma,
        ]
    }
}
