//! MarketApi trait for exchange-specific snapshot requests.

use crate::indicators::candle::Candle;

// This trait is the seam that keeps SnapshotClient exchange-agnostic.
// Each exchange implements the request formatting and response parsing;
// SnapshotClient owns the connection, the fallback policy and the
// assembly of the snapshot. Adding an exchange = implement this trait.

/// Exchange-specific request formatting and response parsing for one-shot
/// market snapshots over a WebSocket API.
pub trait MarketApi: Send + Sync + 'static {
    /// Primary WebSocket API endpoint URL.
    fn endpoint(&self) -> &str;

    /// Fallback endpoint URL, tried when the primary fails.
    fn fallback_endpoint(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> &'static str;

    /// Formats the request for the current spot price of `symbol`.
    fn format_spot_request(&self, symbol: &str) -> String;

    /// Formats the request for the trailing candle window of `symbol`.
    fn format_klines_request(&self, symbol: &str, interval: &str, limit: usize) -> String;

    /// Parses a spot-price response. Returns `None` for messages that are
    /// not the spot response (control frames, other replies).
    fn parse_spot_response(&self, msg: &str) -> Option<f64>;

    /// Parses a candle-window response into chronologically ascending
    /// candles. Returns `None` for unrelated messages.
    fn parse_klines_response(&self, msg: &str) -> Option<Vec<Candle>>;
}
