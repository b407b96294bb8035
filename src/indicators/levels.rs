//! Support and resistance levels from trailing price extremes

pub const DEFAULT_LEVEL_LOOKBACK: usize = 20;

/// Support level: the minimum low over the trailing `lookback` samples.
///
/// When fewer samples are available the whole series is scanned. Returns
/// `0.0` for an empty series.
pub fn support(lows: &[f64], lookback: usize) -> f64 {
    let window = trailing(lows, lookback);
    if window.is_empty() {
        return 0.0;
    }

    window.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Resistance level: the maximum high over the trailing `lookback` samples.
///
/// When fewer samples are available the whole series is scanned. Returns
/// `0.0` for an empty series.
pub fn resistance(highs: &[f64], lookback: usize) -> f64 {
    let window = trailing(highs, lookback);
    if window.is_empty() {
        return 0.0;
    }

    window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn trailing(values: &[f64], lookback: usize) -> &[f64] {
    let start_index = values.len().saturating_sub(lookback.max(1));
    &values[start_index..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_is_min_low() {
        let lows = vec![100.0, 95.0, 98.0, 97.0];
        assert_eq!(support(&lows, 20), 95.0);
    }

    #[test]
    fn test_resistance_is_max_high() {
        let highs = vec![100.0, 105.0, 103.0, 104.0];
        assert_eq!(resistance(&highs, 20), 105.0);
    }

    #[test]
    fn test_lookback_ignores_older_samples() {
        let lows = vec![1.0, 90.0, 92.0];
        // Lookback 2 skips the old extreme at index 0
        assert_eq!(support(&lows, 2), 90.0);

        let highs = vec![500.0, 90.0, 92.0];
        assert_eq!(resistance(&highs, 2), 92.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(support(&[], 20), 0.0);
        assert_eq!(resistance(&[], 20), 0.0);
    }
}
