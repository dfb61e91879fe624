//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::{Candle, RsiCondition, RsiIndicator};

pub const RSI_PERIOD: u32 = 14;
pub const RSI_MIDLINE: f64 = 50.0;

/// Calculate RSI indicator over the trailing `period` price changes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// A window with no losses cannot form RS. A window with no movement at all
/// reports 50 ([`RsiCondition::Flat`]); a window with gains only reports 100
/// ([`RsiCondition::Saturated`]).
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    if period == 0 || candles.len() < period as usize + 1 {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let changes = math::deltas(&closes);

    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    let avg_gain = math::sma(&gains, period as usize)?;
    let avg_loss = math::sma(&losses, period as usize)?;

    let (value, condition) = rsi_from_averages(avg_gain, avg_loss);
    Some(RsiIndicator {
        value,
        period,
        condition,
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, RSI_PERIOD)
}

pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> (f64, RsiCondition) {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return (RSI_MIDLINE, RsiCondition::Flat);
        }
        return (100.0, RsiCondition::Saturated);
    }

    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs)), RsiCondition::Normal)
}
