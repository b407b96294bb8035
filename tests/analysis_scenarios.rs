//! End-to-end scenarios pinning the documented behavior of the scoring
//! pipeline: flat-window degeneracies, sentiment precedence, the additive
//! strike-score stack and the notification trigger.

use wheel_signals::indicators::volatility::BollingerBands;
use wheel_signals::market::{DerivativesSnapshot, MarketSnapshot};
use wheel_signals::signal::technical::MacdOutput;
use wheel_signals::signal::{
    Recommendation, Sentiment, TechnicalIndicators, Trend, analyze, compute_indicators,
    compute_sentiment, generate_strikes, round_to_tick, should_notify,
};
use wheel_signals::Candle;

fn flat_candle(timestamp: u64, price: f64, volume: f64) -> Candle {
    Candle::new(timestamp, price, price, price, price, volume)
}

#[test]
fn flat_window_degenerates_cleanly() {
    // 100 identical candles: every indicator has a defined, finite value
    let closes = vec![50000.0; 100];
    let volumes = vec![1.0; 100];

    let snapshot =
        compute_indicators(&closes, &closes, &closes, &volumes, 50000.0).unwrap();

    assert_eq!(snapshot.volatility, 0.0);
    assert_eq!(snapshot.rsi, 100.0); // no sampled losses
    assert_eq!(snapshot.bollinger.upper, 50000.0);
    assert_eq!(snapshot.bollinger.middle, 50000.0);
    assert_eq!(snapshot.bollinger.lower, 50000.0);
    // Zero-width band reports the neutral midpoint instead of dividing by
    // zero
    assert_eq!(snapshot.bollinger.position, 0.5);
    assert_eq!(snapshot.twap, 50000.0);
    assert_eq!(snapshot.vwap, 50000.0);
    assert_eq!(snapshot.support, 50000.0);
    assert_eq!(snapshot.resistance, 50000.0);
    assert_eq!(snapshot.trend, Trend::Neutral);
    assert_eq!(snapshot.macd.histogram, 0.0);
    // 50 base + 10 for the neutral band position; RSI 100 and the flat
    // trend earn nothing
    assert_eq!(snapshot.score, 60.0);
}

#[test]
fn indicator_engine_is_idempotent() {
    let closes: Vec<f64> = (0..100).map(|i| 50000.0 + (i as f64 * 37.0) % 900.0).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 50.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 50.0).collect();
    let volumes: Vec<f64> = (0..100).map(|i| 1.0 + (i % 7) as f64).collect();

    let first = compute_indicators(&closes, &highs, &lows, &volumes, 50500.0).unwrap();
    let second = compute_indicators(&closes, &highs, &lows, &volumes, 50500.0).unwrap();

    assert_eq!(first.rsi, second.rsi);
    assert_eq!(first.macd.macd, second.macd.macd);
    assert_eq!(first.bollinger.position, second.bollinger.position);
    assert_eq!(first.twap, second.twap);
    assert_eq!(first.vwap, second.vwap);
    assert_eq!(first.volatility, second.volatility);
    assert_eq!(first.score, second.score);
}

#[test]
fn sentiment_greed_precedence_over_negative_funding() {
    // funding -0.02 alone reads as fear, but the long-skewed book matches
    // the greed branch first
    let metrics = compute_sentiment(-0.02, 1.3);

    assert_eq!(metrics.score, 85.0); // 50 + 20 + 15, clamp is a no-op
    assert_eq!(metrics.sentiment, Sentiment::Greed);
}

#[test]
fn sentiment_is_idempotent_and_clamped() {
    for (funding, ratio) in [(-0.02, 1.3), (10.0, 0.0), (-10.0, 100.0)] {
        let first = compute_sentiment(funding, ratio);
        let second = compute_sentiment(funding, ratio);
        assert_eq!(first.score, second.score);
        assert_eq!(first.sentiment, second.sentiment);
        assert!((0.0..=100.0).contains(&first.score));
    }
}

fn scenario_technical() -> TechnicalIndicators {
    TechnicalIndicators {
        rsi: 55.0,
        macd: MacdOutput {
            macd: 120.0,
            signal: 120.0,
            histogram: 0.0,
        },
        bollinger: BollingerBands {
            upper: 94000.0,
            middle: 91500.0,
            lower: 89000.0,
            position: 0.6,
        },
        twap: 91500.0,
        vwap: 91600.0,
        volatility: 2.0,
        trend: Trend::Bullish,
        support: 85000.0,
        resistance: 95000.0,
        score: 85.0,
    }
}

#[test]
fn bullish_fearful_market_flags_sell_put() {
    let technical = scenario_technical();
    // funding -0.02, balanced book: fear label, score 70
    let onchain = compute_sentiment(-0.02, 1.0);
    assert_eq!(onchain.sentiment, Sentiment::Fear);
    assert_eq!(onchain.score, 70.0);

    let ladder = generate_strikes(92000.0, &technical, &onchain);

    assert_eq!(ladder.len(), 8);
    let top = &ladder[0];

    // Hand-summed stack for the 89000 strike (distance ~3.26%):
    //   50 base
    //  -10 premium far from target (the estimate saturates at 0.50)
    //  +15 strike above 97% of support
    //  +12 bullish trend at >3% distance
    //  +10 RSI below 60
    //  +12 fearful sentiment
    //  +14 on-chain score * 0.2
    //  +15 distance in the 3-8% band
    //  -15 premium above 2x target
    //  = 103, clamped to 100
    assert_eq!(top.strike, 89000.0);
    assert_eq!(top.score, 100.0);
    assert_eq!(top.recommendation, Recommendation::SellPut);

    for option in &ladder {
        assert!(option.score > 75.0);
        assert_eq!(option.recommendation, Recommendation::SellPut);
    }
}

#[test]
fn ladder_is_capped_sorted_and_tick_aligned() {
    let technical = scenario_technical();
    let onchain = compute_sentiment(0.0, 1.0);

    for spot in [8_000.0, 12_000.0, 60_000.0, 92_000.0, 150_000.0] {
        let ladder = generate_strikes(spot, &technical, &onchain);

        assert!(!ladder.is_empty(), "empty ladder for spot {}", spot);
        assert!(ladder.len() <= 8);

        for pair in ladder.windows(2) {
            assert!(
                pair[0].score >= pair[1].score || (pair[1].score - pair[0].score) < 5.0,
                "ladder for spot {} not ordered: {} before {}",
                spot,
                pair[0].score,
                pair[1].score
            );
        }

        for option in &ladder {
            // Every strike is aligned to the tick of its own magnitude band
            let tick = if option.strike > 100_000.0 {
                1000.0
            } else if option.strike > 50_000.0 {
                500.0
            } else if option.strike > 10_000.0 {
                100.0
            } else {
                50.0
            };
            assert_eq!(
                option.strike % tick,
                0.0,
                "strike {} misaligned for spot {}",
                option.strike,
                spot
            );
            assert!(option.delta >= 0.05);
            assert!((0.05..=0.50).contains(&option.premium));
            assert!((0.0..=100.0).contains(&option.score));
        }
    }
}

#[test]
fn tick_rounding_band_boundaries() {
    // The band edges are exclusive on the low side
    assert_eq!(round_to_tick(10_000.0) % 50.0, 0.0);
    assert_eq!(round_to_tick(50_000.0) % 100.0, 0.0);
    assert_eq!(round_to_tick(100_000.0) % 500.0, 0.0);

    // A raw strike of 83,421 (e.g. 92,000 spot, ~9.3% down) lands in the
    // 50k-100k band and must round to a multiple of 500
    assert_eq!(round_to_tick(83_421.0), 83_500.0);
    assert_eq!(round_to_tick(100_001.0), 100_000.0);
}

#[test]
fn analysis_pipeline_and_notification_trigger() {
    // Rising market: 100 hourly candles climbing toward spot
    let candles: Vec<Candle> = (0..100)
        .map(|i| flat_candle(1_700_000_000_000 + i as u64 * 3_600_000, 88_000.0 + i as f64 * 40.0, 3.0))
        .collect();
    let market = MarketSnapshot::new("BTCUSDT", 92_000.0, "binance", 1_700_360_000_000, candles);
    let derivatives = DerivativesSnapshot::new("BTCUSDT", -0.02, 1.0, 1_700_360_000_000);

    let result = analyze(&market, &derivatives).unwrap();

    assert_eq!(result.timestamp, 1_700_360_000_000);
    assert_eq!(result.source, "binance");
    assert_eq!(result.technical.trend, Trend::Bullish);
    assert_eq!(result.onchain.sentiment, Sentiment::Fear);
    assert!(!result.strikes.is_empty());

    // The saturated premium estimate keeps the premium leg of the trigger
    // satisfied; the score leg decides, and the best strikes here sit above
    // support in the sweet-spot band with fearful sentiment backing them
    let top = result.top();
    assert!(top.premium >= 0.20);
    assert!(top.score > 80.0);
    assert!(should_notify(&result));
}
