//! Derivatives-market sentiment scoring from funding rate and long/short
//! positioning.

use serde::Serialize;

/// Crowd-positioning label derived from funding rate and long/short ratio.
///
/// The variants are evaluated top to bottom and the first match wins; the
/// greed checks deliberately run before the fear checks, so a crowded-long
/// book (ratio > 1.2) reads as greed even under a negative funding rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    ExtremeGreed,
    Greed,
    Neutral,
    Fear,
    ExtremeFear,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::ExtremeGreed => "extreme_greed",
            Sentiment::Greed => "greed",
            Sentiment::Neutral => "neutral",
            Sentiment::Fear => "fear",
            Sentiment::ExtremeFear => "extreme_fear",
        }
    }

    /// True for the fear side of the spectrum (attractive for put selling).
    pub fn is_fearful(&self) -> bool {
        matches!(self, Sentiment::Fear | Sentiment::ExtremeFear)
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentiment snapshot for one symbol.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OnChainMetrics {
    /// Funding rate as a percentage (0.01 = 0.01%). Positive = longs pay
    /// shorts.
    pub funding_rate: f64,
    /// Long/short account ratio; 1.0 = balanced book.
    pub long_short_ratio: f64,
    pub sentiment: Sentiment,
    /// Composite on-chain score, clamped to [0, 100].
    pub score: f64,
}

/// Scores derivatives-market sentiment.
///
/// Negative funding (shorts paying longs) and a long-skewed book both raise
/// the score — conditions under which selling puts collects richer premium.
/// The score is clamped to [0, 100] for arbitrary inputs.
pub fn compute_sentiment(funding_rate: f64, long_short_ratio: f64) -> OnChainMetrics {
    let mut score: f64 = 50.0;

    if funding_rate < -0.01 {
        score += 20.0;
    } else if funding_rate < 0.0 {
        score += 10.0;
    }
    if funding_rate > 0.05 {
        score -= 15.0;
    }

    if long_short_ratio > 1.2 {
        score += 15.0;
    }
    if long_short_ratio < 0.8 {
        score -= 10.0;
    }

    OnChainMetrics {
        funding_rate,
        long_short_ratio,
        sentiment: classify(funding_rate, long_short_ratio),
        score: score.clamp(0.0, 100.0),
    }
}

fn classify(funding_rate: f64, long_short_ratio: f64) -> Sentiment {
    if funding_rate > 0.03 || long_short_ratio > 1.5 {
        Sentiment::ExtremeGreed
    } else if funding_rate > 0.01 || long_short_ratio > 1.2 {
        Sentiment::Greed
    } else if funding_rate < -0.03 || long_short_ratio < 0.5 {
        Sentiment::ExtremeFear
    } else if funding_rate < -0.01 || long_short_ratio < 0.8 {
        Sentiment::Fear
    } else {
        Sentiment::Neutral
    }
}
