//! Error type for the scoring core.

use thiserror::Error;

/// Failure modes of the signal-scoring functions.
///
/// Short-but-well-formed input is never an error: indicators degrade to
/// whatever trailing window is available. Only malformed input (empty or
/// mismatched series, a non-positive spot price) is rejected, and no
/// partial result is returned in that case.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
