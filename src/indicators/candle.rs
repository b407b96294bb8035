//! Candle (OHLCV) data structure with timestamp

/// A single candlestick with OHLCV data and timestamp.
///
/// The timestamp is Unix time in milliseconds (candle open time), the format
/// used by most cryptocurrency exchanges (Binance, Coinbase, etc.).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    /// Unix timestamp in milliseconds (candle open time). `0` if unknown.
    pub timestamp: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Creates a new Candle.
    ///
    /// Use `0` for the timestamp if not available (e.g., in tests).
    pub fn new(timestamp: u64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        debug_assert!(high >= low, "candle high must be >= low");
        debug_assert!(
            open >= low && open <= high,
            "candle open must be within [low, high]"
        );
        debug_assert!(
            close >= low && close <= high,
            "candle close must be within [low, high]"
        );

        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

// Indicators operate on parallel f64 series rather than candle slices so
// that mismatched inputs are detectable at the engine boundary. These
// helpers split a candle window into those series.

/// Extracts the close prices from a slice of candles.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// Extracts the high prices from a slice of candles.
pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high).collect()
}

/// Extracts the low prices from a slice of candles.
pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low).collect()
}

/// Extracts the volumes from a slice of candles.
pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.volume).collect()
}
