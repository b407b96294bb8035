//! Snapshot types produced by the market-data adapters.
//!
//! Snapshots are plain value objects: the adapters stamp them once at fetch
//! time and the scoring core treats them as read-only input. The core never
//! reads the clock itself, so the `fetched_at` stamp is the only notion of
//! "now" an analysis carries.

use crate::indicators::candle::Candle;

/// Spot price plus the rolling candle window for one symbol.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub spot_price: f64,
    /// Tag identifying which data source served the snapshot. Audit and
    /// display only; never used in scoring.
    pub source: String,
    /// Unix timestamp in milliseconds.
    pub fetched_at: u64,
    /// Chronologically ascending, oldest first. 100 hourly candles in the
    /// default configuration.
    pub candles: Vec<Candle>,
}

impl MarketSnapshot {
    pub fn new(
        symbol: impl Into<String>,
        spot_price: f64,
        source: impl Into<String>,
        fetched_at: u64,
        candles: Vec<Candle>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            spot_price,
            source: source.into(),
            fetched_at,
            candles,
        }
    }
}

/// Derivatives-market sentiment inputs for one symbol.
#[derive(Debug, Clone)]
pub struct DerivativesSnapshot {
    pub symbol: String,
    /// Funding rate as a percentage (0.01 = 0.01%). Positive = longs pay
    /// shorts.
    pub funding_rate: f64,
    /// Long/short account ratio; 1.0 = balanced book.
    pub long_short_ratio: f64,
    /// Unix timestamp in milliseconds.
    pub fetched_at: u64,
}

impl DerivativesSnapshot {
    pub fn new(
        symbol: impl Into<String>,
        funding_rate: f64,
        long_short_ratio: f64,
        fetched_at: u64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            funding_rate,
            long_short_ratio,
            fetched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_snapshot_creation() {
        let candles = vec![Candle::new(0, 100.0, 110.0, 90.0, 105.0, 1000.0)];
        let snapshot = MarketSnapshot::new("BTCUSDT", 105.0, "binance", 1_700_000_000_000, candles);

        assert_eq!(snapshot.symbol, "BTCUSDT");
        assert_eq!(snapshot.spot_price, 105.0);
        assert_eq!(snapshot.source, "binance");
        assert_eq!(snapshot.candles.len(), 1);
    }

    #[test]
    fn test_derivatives_snapshot_creation() {
        let snapshot = DerivativesSnapshot::new("BTCUSDT", -0.02, 1.3, 1_700_000_000_000);

        assert_eq!(snapshot.funding_rate, -0.02);
        assert_eq!(snapshot.long_short_ratio, 1.3);
        assert_eq!(snapshot.fetched_at, 1_700_000_000_000);
    }
}
