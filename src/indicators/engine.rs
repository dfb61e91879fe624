//! Computes the full indicator snapshot for the latest candle.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::trend::ema;
use crate::indicators::volume::volume_ma;
use crate::models::indicators::{Candle, IndicatorSet};

/// Longest lookback any indicator needs (EMA 50)
pub const MIN_CANDLES: usize = 50;

pub fn compute_indicator_set(
    symbol: &str,
    candles: &[Candle],
) -> Result<IndicatorSet, IndicatorError> {
    if candles.len() < MIN_CANDLES {
        return Err(IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            actual: candles.len(),
        });
    }
    validate_candles(candles)?;

    let last = candles.last().ok_or(IndicatorError::InsufficientData {
        required: MIN_CANDLES,
        actual: 0,
    })?;

    let ema_fast = ema::calculate_ema(candles, ema::EMA_FAST_PERIOD)
        .ok_or_else(|| missing("EMA", ema::EMA_FAST_PERIOD as usize))?;
    let ema_slow = ema::calculate_ema(candles, ema::EMA_SLOW_PERIOD)
        .ok_or_else(|| missing("EMA", ema::EMA_SLOW_PERIOD as usize))?;
    let rsi = rsi::calculate_rsi_default(candles)
        .ok_or_else(|| missing("RSI", rsi::RSI_PERIOD as usize + 1))?;
    let macd = macd::calculate_macd_default(candles).ok_or_else(|| {
        missing(
            "MACD",
            (macd::MACD_SLOW_PERIOD + macd::MACD_SIGNAL_PERIOD) as usize,
        )
    })?;
    let volume = volume_ma::calculate_volume_ma(candles, volume_ma::VOLUME_MA_PERIOD)
        .ok_or_else(|| missing("volume MA", volume_ma::VOLUME_MA_PERIOD as usize))?;

    let set = IndicatorSet {
        symbol: symbol.to_string(),
        price: last.close,
        ema_fast,
        ema_slow,
        rsi,
        macd,
        volume,
        timestamp: last.timestamp,
    };

    if set.values().iter().any(|v| !v.is_finite()) {
        return Err(IndicatorError::ComputationDegenerate(format!(
            "non-finite indicator value for {}",
            symbol
        )));
    }

    Ok(set)
}

/// Reject inputs that would poison every rolling statistic
fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        if !candle.close.is_finite() {
            return Err(IndicatorError::ComputationDegenerate(format!(
                "non-finite close at index {}",
                index
            )));
        }
        if !candle.volume.is_finite() || candle.volume < 0.0 {
            return Err(IndicatorError::ComputationDegenerate(format!(
                "invalid volume {} at index {}",
                candle.volume, index
            )));
        }
    }
    Ok(())
}

fn missing(name: &str, required: usize) -> IndicatorError {
    IndicatorError::ComputationDegenerate(format!(
        "{} needs {} candles and produced no value",
        name, required
    ))
}
