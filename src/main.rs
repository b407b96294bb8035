//! One-shot analysis CLI: fetch the market and derivatives snapshots for a
//! symbol (default BTCUSDT) and print the ranked strike ladder as JSON.

use anyhow::Result;
use tracing::info;

use wheel_signals::market::{DerivativesClient, new_binance_client};
use wheel_signals::signal::{analyze, should_notify};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BTCUSDT".to_string());

    let market = new_binance_client().fetch(&symbol).await?;
    let derivatives = DerivativesClient::new().fetch(&symbol).await?;

    info!(
        symbol = %symbol,
        spot = market.spot_price,
        source = %market.source,
        candles = market.candles.len(),
        funding_rate = derivatives.funding_rate,
        long_short_ratio = derivatives.long_short_ratio,
        "snapshots fetched"
    );

    let result = analyze(&market, &derivatives)?;

    let top = result.top();
    info!(
        strike = top.strike,
        premium = top.premium,
        score = top.score,
        recommendation = top.recommendation.as_str(),
        "top strike"
    );
    if should_notify(&result) {
        info!("top strike qualifies for alert dispatch");
    }

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
