//! Technical indicator engine: turns a candle window into a single
//! indicator snapshot plus a composite technical score.

use serde::Serialize;

use crate::indicators::candle::{self, Candle};
use crate::indicators::levels::{DEFAULT_LEVEL_LOOKBACK, resistance, support};
use crate::indicators::momentum::rsi;
use crate::indicators::moving_averages::{ema, sma, twap, vwap};
use crate::indicators::volatility::{
    BollingerBands, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV, bollinger_bands,
    realized_volatility,
};
use crate::signal::error::SignalError;

const MACD_FAST_PERIOD: usize = 12;
const MACD_SLOW_PERIOD: usize = 26;
const MACD_SIGNAL_PERIOD: usize = 9;
const TREND_FAST_PERIOD: usize = 20;
const TREND_SLOW_PERIOD: usize = 50;

/// Trend classification from the SMA20/SMA50 structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// MACD line, signal line and histogram.
///
/// The line is the scalar EMA(12) - EMA(26) of the whole window, and the
/// signal is the EMA(9) of the single-element series holding that scalar,
/// which collapses to the line itself (histogram 0). This mirrors the
/// production signal job; see DESIGN.md for the open question on a true
/// multi-period signal line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// One indicator snapshot for a candle window.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalIndicators {
    pub rsi: f64,
    pub macd: MacdOutput,
    pub bollinger: BollingerBands,
    pub twap: f64,
    pub vwap: f64,
    /// Per-sample realized volatility as a percentage (not annualized).
    pub volatility: f64,
    pub trend: Trend,
    pub support: f64,
    pub resistance: f64,
    /// Composite technical score, clamped to [0, 100].
    pub score: f64,
}

impl TechnicalIndicators {
    /// Convenience wrapper: splits a candle window into parallel series and
    /// runs [`compute_indicators`].
    pub fn from_candles(
        candles: &[Candle],
        current_price: f64,
    ) -> Result<TechnicalIndicators, SignalError> {
        compute_indicators(
            &candle::closes(candles),
            &candle::highs(candles),
            &candle::lows(candles),
            &candle::volumes(candles),
            current_price,
        )
    }
}

/// Computes the full indicator snapshot for a window of market data.
///
/// The four series must be parallel (equal length, chronologically ordered
/// oldest to newest). Fails with `InvalidInput` when lengths mismatch or
/// the window is empty; a window merely shorter than an indicator's
/// lookback degrades gracefully to the available samples.
pub fn compute_indicators(
    closes: &[f64],
    highs: &[f64],
    lows: &[f64],
    volumes: &[f64],
    current_price: f64,
) -> Result<TechnicalIndicators, SignalError> {
    if closes.is_empty() {
        return Err(SignalError::InvalidInput("empty price series".into()));
    }
    if highs.len() != closes.len() || lows.len() != closes.len() || volumes.len() != closes.len() {
        return Err(SignalError::InvalidInput(format!(
            "series length mismatch: closes={} highs={} lows={} volumes={}",
            closes.len(),
            highs.len(),
            lows.len(),
            volumes.len()
        )));
    }

    let rsi_value = rsi(closes, None);
    let macd = compute_macd(closes);
    let bollinger = bollinger_bands(
        closes,
        current_price,
        DEFAULT_BOLLINGER_PERIOD,
        DEFAULT_BOLLINGER_STD_DEV,
    );
    let volatility = realized_volatility(closes);
    let trend = classify_trend(closes, current_price);

    let score = technical_score(rsi_value, &macd, &bollinger, trend);

    Ok(TechnicalIndicators {
        rsi: rsi_value,
        macd,
        bollinger,
        twap: twap(closes),
        vwap: vwap(closes, volumes),
        volatility,
        trend,
        support: support(lows, DEFAULT_LEVEL_LOOKBACK),
        resistance: resistance(highs, DEFAULT_LEVEL_LOOKBACK),
        score,
    })
}

fn compute_macd(closes: &[f64]) -> MacdOutput {
    let macd_line = ema(closes, MACD_FAST_PERIOD) - ema(closes, MACD_SLOW_PERIOD);
    // EMA over a one-element series collapses to its seed
    let signal = ema(&[macd_line], MACD_SIGNAL_PERIOD);

    MacdOutput {
        macd: macd_line,
        signal,
        histogram: macd_line - signal,
    }
}

/// Bullish when price sits above a rising SMA structure, bearish for the
/// mirror image, neutral otherwise. Comparisons are strict.
fn classify_trend(closes: &[f64], current_price: f64) -> Trend {
    let sma_fast = sma(closes, TREND_FAST_PERIOD);
    let sma_slow = sma(closes, TREND_SLOW_PERIOD);

    if current_price > sma_fast && sma_fast > sma_slow {
        Trend::Bullish
    } else if current_price < sma_fast && sma_fast < sma_slow {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

fn technical_score(rsi: f64, macd: &MacdOutput, bollinger: &BollingerBands, trend: Trend) -> f64 {
    let mut score: f64 = 50.0;

    if rsi > 30.0 && rsi < 70.0 {
        score += 15.0;
    }
    if macd.histogram > 0.0 {
        score += 10.0;
    }
    if bollinger.position > 0.3 && bollinger.position < 0.7 {
        score += 10.0;
    }
    if trend == Trend::Bullish {
        score += 15.0;
    }

    score.clamp(0.0, 100.0)
}
