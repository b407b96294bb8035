//! Price averages: SMA, EMA, TWAP and VWAP

/// Calculates the Simple Moving Average (SMA) over a value series.
///
/// SMA = (V1 + V2 + ... + Vn) / n
///
/// Uses the most recent `period` values; when fewer are available the
/// average is taken over the whole series. Returns `0.0` for an empty
/// series or a zero period.
pub fn sma(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.is_empty() {
        return 0.0;
    }

    let start_index = values.len().saturating_sub(period);
    let window = &values[start_index..];

    window.iter().sum::<f64>() / window.len() as f64
}

/// Calculates the Exponential Moving Average (EMA) over a value series.
///
/// EMA gives more weight to recent values using a smoothing multiplier:
/// EMA = V * k + EMA_prev * (1 - k), where k = 2 / (period + 1)
///
/// The recurrence is seeded with the first element of the series and folded
/// over every subsequent element, so the result reflects the entire series,
/// not just the trailing `period` window. Returns `0.0` for an empty series.
pub fn ema(values: &[f64], period: usize) -> f64 {
    let Some(&first) = values.first() else {
        return 0.0;
    };

    let k = 2.0 / (period as f64 + 1.0);

    values[1..]
        .iter()
        .fold(first, |prev, &value| value * k + prev * (1.0 - k))
}

/// Calculates the Time-Weighted Average Price: the arithmetic mean of all
/// closes in the window. Returns `0.0` for an empty series.
pub fn twap(closes: &[f64]) -> f64 {
    if closes.is_empty() {
        return 0.0;
    }

    closes.iter().sum::<f64>() / closes.len() as f64
}

/// Calculates the Volume-Weighted Average Price over the whole window.
///
/// VWAP = sum(close * volume) / sum(volume)
///
/// The two series must have equal length (enforced by the engine boundary).
/// A window with zero total volume carries no weighting information, so the
/// result degrades to the TWAP.
pub fn vwap(closes: &[f64], volumes: &[f64]) -> f64 {
    let total_volume: f64 = volumes.iter().sum();
    if total_volume == 0.0 {
        return twap(closes);
    }

    let weighted: f64 = closes.iter().zip(volumes).map(|(c, v)| c * v).sum();
    weighted / total_volume
}
