//! Strike ladder generation and ranking for cash-secured put selling.

use std::cmp::Ordering;

use serde::Serialize;

use crate::signal::sentiment::OnChainMetrics;
use crate::signal::technical::{TechnicalIndicators, Trend};

/// Target premium yield per day, as a percentage of notional.
pub const TARGET_DAILY_PREMIUM: f64 = 0.20;

/// Maximum number of ranked strikes returned to the caller.
pub const MAX_LADDER_LEN: usize = 8;

const MIN_OTM_DISTANCE: f64 = 0.02;
const MAX_OTM_DISTANCE: f64 = 0.12;
const DISTANCE_STEP: f64 = 0.003;

const MIN_PREMIUM: f64 = 0.05;
const MAX_PREMIUM: f64 = 0.50;

/// Action suggested for a scored strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SellPut,
    Consider,
    Hold,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::SellPut => "SELL_PUT",
            Recommendation::Consider => "CONSIDER",
            Recommendation::Hold => "HOLD",
        }
    }

    fn from_score(score: f64) -> Self {
        if score > 75.0 {
            Recommendation::SellPut
        } else if score > 60.0 {
            Recommendation::Consider
        } else {
            Recommendation::Hold
        }
    }
}

/// One scored put-strike candidate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrikeOption {
    /// Strike price rounded to an exchange-realistic tick.
    pub strike: f64,
    /// Fractional OTM distance below spot, recomputed from the rounded
    /// strike.
    pub distance: f64,
    /// Approximate put delta (0 = far OTM, 0.5 = at the money).
    pub delta: f64,
    /// Estimated one-day premium yield, percent of notional.
    pub premium: f64,
    /// Composite score, clamped to [0, 100].
    pub score: f64,
    pub recommendation: Recommendation,
}

/// Rounds a raw strike to the tick size used on exchange option chains for
/// its magnitude band: nearest 1000 above 100k, 500 above 50k, 100 above
/// 10k, 50 otherwise.
pub fn round_to_tick(raw: f64) -> f64 {
    let tick = if raw > 100_000.0 {
        1000.0
    } else if raw > 50_000.0 {
        500.0
    } else if raw > 10_000.0 {
        100.0
    } else {
        50.0
    };

    (raw / tick).round() * tick
}

/// Coarse put-delta proxy: linear in OTM distance with a 0.05 floor.
fn estimate_delta(distance: f64) -> f64 {
    (0.5 - distance * 3.5).max(0.05)
}

/// Premium estimate for a one-day tenor, in percent of notional.
///
/// Scales the window volatility down to a daily figure and adds a bonus for
/// OTM distance, clamped into the realistic quote range.
fn estimate_premium(distance: f64, volatility: f64) -> f64 {
    let daily_volatility = volatility / 365.0_f64.sqrt();
    let distance_bonus = distance * 100.0 * 0.8;
    let volatility_factor = daily_volatility * 1.5;

    (distance_bonus + volatility_factor).clamp(MIN_PREMIUM, MAX_PREMIUM)
}

fn score_strike(
    strike: f64,
    distance: f64,
    delta: f64,
    premium: f64,
    technical: &TechnicalIndicators,
    onchain: &OnChainMetrics,
) -> f64 {
    let mut score = 50.0;

    // Proximity to the target daily premium dominates
    let premium_gap = (premium - TARGET_DAILY_PREMIUM).abs();
    if premium_gap < 0.03 {
        score += 35.0;
    } else if premium_gap < 0.05 {
        score += 25.0;
    } else if premium_gap < 0.08 {
        score += 15.0;
    } else if premium_gap < 0.12 {
        score += 5.0;
    } else {
        score -= 10.0;
    }

    // Strikes holding above the recent support floor are safer to sell
    if strike > technical.support * 0.97 {
        score += 15.0;
    }
    if technical.trend == Trend::Bullish && distance > 0.03 {
        score += 12.0;
    }
    if technical.rsi < 60.0 {
        score += 10.0;
    }
    if onchain.sentiment.is_fearful() {
        score += 12.0;
    }
    score += onchain.score * 0.2;

    // Sweet-spot OTM band
    if distance >= 0.03 && distance <= 0.08 {
        score += 15.0;
    } else if distance >= 0.02 && distance < 0.03 {
        score += 8.0;
    } else if distance > 0.08 && distance <= 0.10 {
        score += 5.0;
    }

    if delta >= 0.10 && delta <= 0.25 {
        score += 8.0;
    }

    if premium >= TARGET_DAILY_PREMIUM && premium <= TARGET_DAILY_PREMIUM * 1.4 {
        score += 18.0;
    }
    if premium > TARGET_DAILY_PREMIUM * 2.0 {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

/// Generates the ranked ladder of put-strike candidates below spot.
///
/// Walks candidate OTM distances from 2% to 12% in 0.3-point steps, rounds
/// each raw strike to its tick, deduplicates by rounded value, scores every
/// candidate against the technical and sentiment state and returns at most
/// [`MAX_LADDER_LEN`] entries, best first. Two scores closer than 5 points
/// are ranked by proximity to the target premium instead.
///
/// Pure and deterministic: identical inputs produce identical ladders.
pub fn generate_strikes(
    current_price: f64,
    technical: &TechnicalIndicators,
    onchain: &OnChainMetrics,
) -> Vec<StrikeOption> {
    let steps = ((MAX_OTM_DISTANCE - MIN_OTM_DISTANCE) / DISTANCE_STEP).round() as usize;
    let mut options: Vec<StrikeOption> = Vec::new();

    for step in 0..=steps {
        let candidate_distance = MIN_OTM_DISTANCE + step as f64 * DISTANCE_STEP;
        let strike = round_to_tick(current_price * (1.0 - candidate_distance));

        // Neighboring steps can round onto the same tick
        if options.iter().any(|o| o.strike == strike) {
            continue;
        }

        // Distance as actually offered after rounding
        let distance = (current_price - strike) / current_price;
        let delta = estimate_delta(distance);
        let premium = estimate_premium(distance, technical.volatility);
        let score = score_strike(strike, distance, delta, premium, technical, onchain);

        options.push(StrikeOption {
            strike,
            distance,
            delta,
            premium,
            score,
            recommendation: Recommendation::from_score(score),
        });
    }

    options.sort_by(|a, b| {
        if (a.score - b.score).abs() < 5.0 {
            let a_gap = (a.premium - TARGET_DAILY_PREMIUM).abs();
            let b_gap = (b.premium - TARGET_DAILY_PREMIUM).abs();
            a_gap.partial_cmp(&b_gap).unwrap_or(Ordering::Equal)
        } else {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
        }
    });
    options.truncate(MAX_LADDER_LEN);

    options
}
