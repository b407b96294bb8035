//! Binance adapters: spot price and candle window over the WebSocket API,
//! derivatives sentiment over the futures REST API.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::indicators::candle::Candle;
use crate::market::fetcher::SnapshotClient;
use crate::market::provider::MarketApi;
use crate::market::snapshot::DerivativesSnapshot;

pub const BINANCE_API_BASE_ENDPOINT: &str = "wss://ws-api.binance.com:443/ws-api/v3";
pub const BINANCE_API_FALLBACK_ENDPOINT: &str = "wss://ws-api.binance.com:9443/ws-api/v3";
pub const BINANCE_FUTURES_REST_ENDPOINT: &str = "https://fapi.binance.com";

// The WS API multiplexes replies; requests carry an id so responses can be
// matched back to what was asked.
const SPOT_REQUEST_ID: u64 = 1;
const KLINES_REQUEST_ID: u64 = 2;

/// Binance WebSocket API adapter for [`SnapshotClient`].
#[derive(Debug, Clone, Default)]
pub struct BinanceApi;

impl BinanceApi {
    pub fn new() -> Self {
        Self
    }
}

impl MarketApi for BinanceApi {
    fn endpoint(&self) -> &str {
        BINANCE_API_BASE_ENDPOINT
    }

    fn fallback_endpoint(&self) -> Option<&str> {
        Some(BINANCE_API_FALLBACK_ENDPOINT)
    }

    fn name(&self) -> &'static str {
        "Binance"
    }

    fn format_spot_request(&self, symbol: &str) -> String {
        format!(
            r#"{{"id":{},"method":"ticker.price","params":{{"symbol":"{}"}}}}"#,
            SPOT_REQUEST_ID,
            symbol.to_uppercase()
        )
    }

    fn format_klines_request(&self, symbol: &str, interval: &str, limit: usize) -> String {
        format!(
            r#"{{"id":{},"method":"klines","params":{{"symbol":"{}","interval":"{}","limit":{}}}}}"#,
            KLINES_REQUEST_ID,
            symbol.to_uppercase(),
            interval,
            limit
        )
    }

    fn parse_spot_response(&self, msg: &str) -> Option<f64> {
        let value: Value = serde_json::from_str(msg).ok()?;
        if value["id"].as_u64()? != SPOT_REQUEST_ID {
            return None;
        }

        value["result"]["price"].as_str()?.parse().ok()
    }

    fn parse_klines_response(&self, msg: &str) -> Option<Vec<Candle>> {
        let value: Value = serde_json::from_str(msg).ok()?;
        if value["id"].as_u64()? != KLINES_REQUEST_ID {
            return None;
        }

        let rows = value["result"].as_array()?;
        let mut candles = Vec::with_capacity(rows.len());
        for row in rows {
            candles.push(parse_kline_row(row)?);
        }

        Some(candles)
    }
}

/// One kline row: `[openTime, open, high, low, close, volume, closeTime,
/// ...]` with prices and volume as strings.
fn parse_kline_row(row: &Value) -> Option<Candle> {
    let timestamp = row.get(0)?.as_u64()?;
    let open = parse_decimal_field(row.get(1)?)?;
    let high = parse_decimal_field(row.get(2)?)?;
    let low = parse_decimal_field(row.get(3)?)?;
    let close = parse_decimal_field(row.get(4)?)?;
    let volume = parse_decimal_field(row.get(5)?)?;

    Some(Candle::new(timestamp, open, high, low, close, volume))
}

fn parse_decimal_field(value: &Value) -> Option<f64> {
    value.as_str()?.parse().ok()
}

pub fn new_binance_client() -> SnapshotClient<BinanceApi> {
    SnapshotClient::new(BinanceApi::new())
}

/// REST client for Binance futures sentiment data: the funding rate from
/// the premium index and the global long/short account ratio.
pub struct DerivativesClient {
    base_url: String,
    client: reqwest::Client,
}

impl DerivativesClient {
    pub fn new() -> Self {
        Self::with_base_url(BINANCE_FUTURES_REST_ENDPOINT)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Current funding rate as a percentage (the exchange reports a
    /// fraction; 0.0001 becomes 0.01).
    pub async fn funding_rate(&self, symbol: &str) -> Result<f64> {
        let url = format!(
            "{}/fapi/v1/premiumIndex?symbol={}",
            self.base_url,
            symbol.to_uppercase()
        );
        let value: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_funding_rate(&value).context("malformed premiumIndex response")
    }

    /// Latest hourly global long/short account ratio.
    pub async fn long_short_ratio(&self, symbol: &str) -> Result<f64> {
        let url = format!(
            "{}/futures/data/globalLongShortAccountRatio?symbol={}&period=1h&limit=1",
            self.base_url,
            symbol.to_uppercase()
        );
        let value: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_long_short_ratio(&value).context("malformed long/short ratio response")
    }

    /// Fetches both sentiment inputs and stamps the snapshot.
    pub async fn fetch(&self, symbol: &str) -> Result<DerivativesSnapshot> {
        let funding_rate = self.funding_rate(symbol).await?;
        let long_short_ratio = self.long_short_ratio(symbol).await?;

        Ok(DerivativesSnapshot::new(
            symbol,
            funding_rate,
            long_short_ratio,
            chrono::Utc::now().timestamp_millis() as u64,
        ))
    }
}

impl Default for DerivativesClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_funding_rate(value: &Value) -> Option<f64> {
    let fraction: f64 = value["lastFundingRate"].as_str()?.parse().ok()?;
    Some(fraction * 100.0)
}

fn parse_long_short_ratio(value: &Value) -> Option<f64> {
    value.as_array()?.first()?["longShortRatio"]
        .as_str()?
        .parse()
        .ok()
}
