//! One-shot analysis: market snapshot + derivatives snapshot in, ranked
//! strike ladder out.

use serde::Serialize;

use crate::market::snapshot::{DerivativesSnapshot, MarketSnapshot};
use crate::signal::error::SignalError;
use crate::signal::sentiment::{OnChainMetrics, compute_sentiment};
use crate::signal::strikes::{StrikeOption, generate_strikes};
use crate::signal::technical::TechnicalIndicators;

/// Minimum top-strike premium for an alert to fire.
pub const NOTIFY_MIN_PREMIUM: f64 = 0.20;
/// Top-strike score must exceed this for an alert to fire.
pub const NOTIFY_MIN_SCORE: f64 = 80.0;

/// Full result of one analysis run.
///
/// Built synchronously from the input snapshots and never mutated
/// afterwards; the caller persists or displays it and decides what to do
/// with the top recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// When the underlying market data was fetched (Unix ms). The engine
    /// itself never reads the clock.
    pub timestamp: u64,
    pub symbol: String,
    pub spot_price: f64,
    /// Which data source served the snapshot (audit/display only).
    pub source: String,
    pub technical: TechnicalIndicators,
    pub onchain: OnChainMetrics,
    /// Ranked strike ladder, best candidate first, at most 8 entries.
    pub strikes: Vec<StrikeOption>,
}

impl AnalysisResult {
    /// The primary recommendation: the first (best-ranked) strike.
    ///
    /// The ladder is never empty for a successfully built result, so this
    /// does not fail.
    pub fn top(&self) -> &StrikeOption {
        &self.strikes[0]
    }
}

/// Runs the full scoring pipeline over already-fetched snapshots.
///
/// Pure apart from the input data: no I/O, no randomness, no time
/// dependency beyond the snapshot timestamps. Fails with `InvalidInput` for
/// a non-positive spot price or an empty candle window; a merely short
/// window degrades gracefully inside the indicator engine.
pub fn analyze(
    market: &MarketSnapshot,
    derivatives: &DerivativesSnapshot,
) -> Result<AnalysisResult, SignalError> {
    if market.spot_price <= 0.0 {
        return Err(SignalError::InvalidInput(format!(
            "non-positive spot price: {}",
            market.spot_price
        )));
    }

    let technical = TechnicalIndicators::from_candles(&market.candles, market.spot_price)?;
    let onchain = compute_sentiment(derivatives.funding_rate, derivatives.long_short_ratio);
    let strikes = generate_strikes(market.spot_price, &technical, &onchain);

    Ok(AnalysisResult {
        timestamp: market.fetched_at,
        symbol: market.symbol.clone(),
        spot_price: market.spot_price,
        source: market.source.clone(),
        technical,
        onchain,
        strikes,
    })
}

/// Notification trigger used by downstream alerting: the top strike must
/// offer at least the target premium with a score above 80.
pub fn should_notify(result: &AnalysisResult) -> bool {
    let top = result.top();
    top.premium >= NOTIFY_MIN_PREMIUM && top.score > NOTIFY_MIN_SCORE
}
