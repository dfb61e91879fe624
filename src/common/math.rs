//! Closed-form rolling statistics over price series

/// Smoothing factor for an EMA of the given span
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Next EMA value given the previous one.
///
/// Written as `prev + α(value - prev)` so a constant input stays exactly constant.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    previous + ema_alpha(period) * (value - previous)
}

/// Full EMA series seeded by the first value.
///
/// Output has the same length as `values`; index `i` only uses `values[..=i]`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return series;
    };
    if period == 0 {
        return series;
    }

    series.push(first);
    let mut previous = first;
    for &value in iter {
        previous = ema_from_previous(value, previous, period);
        series.push(previous);
    }
    series
}

/// Last value of the EMA series
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Simple average of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// First differences: `out[i] = values[i + 1] - values[i]`
pub fn deltas(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Clamp into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
