//! Momentum indicators: Relative Strength Index (RSI)

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculates the Relative Strength Index (RSI) over a close-price series.
///
/// RSI is a momentum oscillator that measures the speed and magnitude of
/// price changes. It oscillates between 0 and 100.
///
/// RSI = 100 - (100 / (1 + RS))
/// where RS = Average Gain / Average Loss over the trailing `period` changes
///
/// The averages are plain arithmetic means of the most recent `period`
/// changes (no Wilder smoothing). When fewer changes are available the
/// average is taken over whatever the trailing window holds. If the average
/// loss is exactly zero the RSI is 100 (no sampled losses).
///
/// Pass `None` to use the default period of 14, or `Some(n)` for a custom
/// period. A zero period returns the neutral value 50.
pub fn rsi(closes: &[f64], period: Option<usize>) -> f64 {
    let period = period.unwrap_or(DEFAULT_RSI_PERIOD);

    if period == 0 {
        return 50.0;
    }

    let changes = price_changes(closes);
    let (gains, losses) = gains_and_losses(&changes);

    // Trailing `period` changes; the whole series when shorter
    let start_index = gains.len().saturating_sub(period);
    let recent_gains = &gains[start_index..];
    let recent_losses = &losses[start_index..];

    let window = recent_gains.len().max(1) as f64;
    let avg_gain: f64 = recent_gains.iter().sum::<f64>() / window;
    let avg_loss: f64 = recent_losses.iter().sum::<f64>() / window;

    if avg_loss == 0.0 {
        // No sampled losses means RSI is 100 (maximum bullish)
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculates price changes between consecutive closes.
///
/// Returns a vector of changes where each value is: current - previous
fn price_changes(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Separates price changes into gains and losses.
///
/// Returns a tuple of (gains, losses) where:
/// - gains[i] = change if positive, else 0
/// - losses[i] = |change| if negative, else 0
fn gains_and_losses(changes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let gains: Vec<f64> = changes
        .iter()
        .map(|&c| if c > 0.0 { c } else { 0.0 })
        .collect();

    let losses: Vec<f64> = changes
        .iter()
        .map(|&c| if c < 0.0 { c.abs() } else { 0.0 })
        .collect();

    (gains, losses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend_closes() -> Vec<f64> {
        vec![
            100.0, 102.0, 105.0, 108.0, 112.0, 116.0, 120.0, 125.0, 130.0, 136.0, 142.0, 148.0,
            155.0, 162.0, 170.0,
        ]
    }

    fn downtrend_closes() -> Vec<f64> {
        vec![
            170.0, 165.0, 160.0, 154.0, 148.0, 142.0, 135.0, 128.0, 121.0, 114.0, 107.0, 100.0,
            93.0, 86.0, 80.0,
        ]
    }

    fn sideways_closes() -> Vec<f64> {
        vec![
            100.0, 102.0, 100.0, 103.0, 101.0, 104.0, 102.0, 105.0, 103.0, 106.0, 104.0, 107.0,
            105.0, 108.0, 106.0,
        ]
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let closes = uptrend_closes();
        let result = rsi(&closes, Some(14));
        // Monotonic uptrend has no losses at all
        assert_eq!(result, 100.0);
    }

    #[test]
    fn test_rsi_oversold() {
        let closes = downtrend_closes();
        let result = rsi(&closes, Some(14));
        assert!(
            result < 30.0,
            "RSI ({}) should be < 30 for strong downtrend",
            result
        );
    }

    #[test]
    fn test_rsi_neutral() {
        let closes = sideways_closes();
        let result = rsi(&closes, Some(14));
        assert!(
            result > 30.0 && result < 70.0,
            "RSI ({}) should be between 30 and 70 for sideways movement",
            result
        );
    }

    #[test]
    fn test_rsi_exact_value() {
        // Changes: +10, -5 over period 2
        // avgGain = 5, avgLoss = 2.5, RS = 2, RSI = 100 - 100/3 = 66.666...
        let closes = vec![100.0, 110.0, 105.0];
        let result = rsi(&closes, Some(2));
        assert!((result - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_short_window_degrades() {
        // Only 2 changes available for a 14-period request: averages are
        // taken over what exists instead of failing
        let closes = vec![100.0, 106.0, 103.0];
        let result = rsi(&closes, Some(14));
        // avgGain = 3, avgLoss = 1.5, RS = 2
        assert!((result - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_flat_series_is_100() {
        let closes = vec![50000.0; 20];
        assert_eq!(rsi(&closes, Some(14)), 100.0);
    }

    #[test]
    fn test_rsi_zero_period() {
        let closes = uptrend_closes();
        assert_eq!(rsi(&closes, Some(0)), 50.0);
    }

    #[test]
    fn test_rsi_default_period() {
        let closes = sideways_closes();
        assert_eq!(rsi(&closes, None), rsi(&closes, Some(14)));
    }

    #[test]
    fn test_price_changes() {
        let closes = vec![100.0, 105.0, 103.0];
        let changes = price_changes(&closes);
        assert_eq!(changes, vec![5.0, -2.0]);
    }

    #[test]
    fn test_gains_and_losses() {
        let changes = vec![5.0, -3.0, 2.0, -1.0, 4.0];
        let (gains, losses) = gains_and_losses(&changes);

        assert_eq!(gains, vec![5.0, 0.0, 2.0, 0.0, 4.0]);
        assert_eq!(losses, vec![0.0, 3.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rsi_bounds() {
        for closes in [uptrend_closes(), downtrend_closes(), sideways_closes()] {
            let result = rsi(&closes, Some(14));
            assert!((0.0..=100.0).contains(&result));
        }
    }
}
