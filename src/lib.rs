//! Wheel-strategy signal engine.
//!
//! Turns a window of OHLCV candles plus derivatives-market sentiment into a
//! ranked ladder of cash-secured-put strike recommendations:
//!
//! - `indicators` — pure technical-indicator primitives (RSI, moving
//!   averages, Bollinger Bands, volatility, support/resistance)
//! - `signal` — the scoring core: technical state, on-chain sentiment and
//!   the strike ladder generator/ranker
//! - `market` — exchange adapters that fetch the spot price, the candle
//!   window and the derivatives sentiment inputs
//!
//! The scoring core is synchronous and pure: given the same snapshots it
//! produces bit-identical results, so independent analyses can run
//! concurrently without any shared state.

pub mod indicators;
pub mod market;
pub mod signal;

// Re-exports for convenience
pub use indicators::candle::Candle;
pub use market::{
    DerivativesClient, DerivativesSnapshot, MarketApi, MarketSnapshot, SnapshotClient,
    new_binance_client,
};
pub use signal::{
    AnalysisResult, OnChainMetrics, Recommendation, Sentiment, SignalError, StrikeOption,
    TechnicalIndicators, Trend, analyze, should_notify,
};
