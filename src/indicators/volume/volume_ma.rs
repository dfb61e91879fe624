//! Trailing simple average of traded volume

use crate::common::math;
use crate::models::indicators::{Candle, VolumeIndicator};

pub const VOLUME_MA_PERIOD: u32 = 20;

pub fn calculate_volume_ma(candles: &[Candle], period: u32) -> Option<VolumeIndicator> {
    let last = candles.last()?;
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let volume_ma = math::sma(&volumes, period as usize)?;

    Some(VolumeIndicator {
        volume: last.volume,
        volume_ma,
        volume_ma_period: period,
    })
}

/// Whether the latest volume is strictly above its moving average
pub fn is_volume_expanding(volume: &VolumeIndicator) -> bool {
    volume.volume > volume.volume_ma
}
