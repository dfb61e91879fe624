//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{Candle, MacdIndicator, MacdState};

pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;
pub const MACD_SIGNAL_PERIOD: u32 = 9;

/// Minimum |MACD - Signal| that counts as a crossover
const CROSSOVER_THRESHOLD: f64 = 0.0001;

/// MACD line for every candle: EMA(fast) - EMA(slow)
pub fn macd_series(closes: &[f64], fast_period: usize, slow_period: usize) -> Vec<f64> {
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);
    fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect()
}

/// Calculate MACD indicator
///
/// MACD = EMA(12) - EMA(26)
/// Signal = EMA(9) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if fast_period == 0 || signal_period == 0 || fast_period >= slow_period {
        return None;
    }
    if candles.len() < slow_period as usize + signal_period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let macd_values = macd_series(&closes, fast_period as usize, slow_period as usize);

    let macd_line = *macd_values.last()?;
    let signal_line = math::ema(&macd_values, signal_period as usize)?;
    let histogram = macd_line - signal_line;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram,
        state: detect_crossover(macd_line, signal_line),
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(
        candles,
        MACD_FAST_PERIOD,
        MACD_SLOW_PERIOD,
        MACD_SIGNAL_PERIOD,
    )
}

pub fn detect_crossover(macd: f64, signal: f64) -> MacdState {
    let diff = macd - signal;
    if diff.abs() < CROSSOVER_THRESHOLD {
        MacdState::Neutral
    } else if diff > 0.0 {
        MacdState::Bullish
    } else {
        MacdState::Bearish
    }
}
