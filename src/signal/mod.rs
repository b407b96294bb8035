//! Signal-scoring core: technical state, derivatives sentiment and the
//! strike ladder. Everything in here is pure and synchronous.

pub mod analysis;
pub mod error;
pub mod sentiment;
pub mod strikes;
pub mod technical;

// Re-exports for convenience
pub use analysis::{AnalysisResult, analyze, should_notify};
pub use error::SignalError;
pub use sentiment::{OnChainMetrics, Sentiment, compute_sentiment};
pub use strikes::{Recommendation, StrikeOption, generate_strikes, round_to_tick};
pub use technical::{MacdOutput, TechnicalIndicators, Trend, compute_indicators};
