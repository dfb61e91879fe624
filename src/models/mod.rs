//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{
    Candle, EmaIndicator, IndicatorSet, MacdIndicator, MacdState, RsiCondition, RsiIndicator,
    VolumeIndicator,
};
pub use signal::{SignalReason, TradeSignal, Trend, Verdict};
