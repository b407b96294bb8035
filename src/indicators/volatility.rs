//! Volatility indicators: realized volatility and Bollinger Bands

use serde::Serialize;

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculates realized volatility from a close-price series.
///
/// Computes simple returns `(close[i] - close[i-1]) / close[i-1]` for all
/// consecutive pairs, then takes the root-mean-square of those returns and
/// expresses it as a percentage. This is the raw per-sample-interval figure,
/// deliberately not annualized.
///
/// Returns `0.0` when the series has fewer than two closes.
pub fn realized_volatility(closes: &[f64]) -> f64 {
    if closes.len() < 2 {
        return 0.0;
    }

    let returns: Vec<f64> = closes
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();

    let mean_sq = returns.iter().map(|r| r * r).sum::<f64>() / returns.len() as f64;
    mean_sq.sqrt() * 100.0
}

/// Bollinger Bands output.
///
/// `position` is the fractional location of the current price between the
/// lower and upper band. It is intentionally unclamped: values outside
/// [0, 1] mean the price sits outside the bands.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub position: f64,
}

/// Calculates Bollinger Bands over the trailing `period` closes.
///
/// middle = SMA(window); upper/lower = middle ± multiplier * std, where std
/// is the population standard deviation of the window. When fewer closes
/// are available the whole series is used.
///
/// A zero-width band (flat window) carries no positional information, so
/// `position` reports the neutral midpoint 0.5 in that case.
pub fn bollinger_bands(
    closes: &[f64],
    current_price: f64,
    period: usize,
    multiplier: f64,
) -> BollingerBands {
    if closes.is_empty() {
        return BollingerBands {
            upper: 0.0,
            middle: 0.0,
            lower: 0.0,
            position: 0.5,
        };
    }

    let start_index = closes.len().saturating_sub(period.max(1));
    let window = &closes[start_index..];

    let middle = window.iter().sum::<f64>() / window.len() as f64;
    let variance =
        window.iter().map(|c| (c - middle) * (c - middle)).sum::<f64>() / window.len() as f64;
    let std_dev = variance.sqrt();

    let upper = middle + multiplier * std_dev;
    let lower = middle - multiplier * std_dev;

    let width = upper - lower;
    let position = if width == 0.0 {
        0.5
    } else {
        (current_price - lower) / width
    };

    BollingerBands {
        upper,
        middle,
        lower,
        position,
    }
}
