//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{Candle, EmaIndicator};

pub const EMA_FAST_PERIOD: u32 = 20;
pub const EMA_SLOW_PERIOD: u32 = 50;

/// Calculate EMA for a specific period
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    if period == 0 || candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let ema_value = math::ema(&closes, period as usize)?;

    Some(EmaIndicator {
        value: ema_value,
        period,
    })
}

/// 1 when the fast EMA is above the slow one, -1 when below, 0 when equal
pub fn compare_emas(fast: f64, slow: f64) -> i32 {
    if fast > slow {
        1
    } else if fast < slow {
        -1
    } else {
        0
    }
}
