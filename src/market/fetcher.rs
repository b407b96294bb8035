//! Generic snapshot fetcher for exchange WebSocket APIs.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::market::provider::MarketApi;
use crate::market::snapshot::MarketSnapshot;

pub const DEFAULT_CANDLE_INTERVAL: &str = "1h";
pub const DEFAULT_WINDOW_LEN: usize = 100;

// Below this the longest indicator lookback (SMA50) no longer gets a full
// window; the indicators still degrade gracefully, so it only warrants a
// warning.
const RECOMMENDED_MIN_WINDOW: usize = 50;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Design: SnapshotClient<A: MarketApi> is generic over the exchange
// adapter. The connection handling and the primary/fallback policy live
// here once; each exchange only formats requests and parses responses.

/// One-shot snapshot client that works with any exchange adapter.
///
/// Opens a WebSocket connection, issues the spot and klines requests,
/// collects both responses and returns the assembled [`MarketSnapshot`].
/// If the primary endpoint fails (connect error, malformed responses or
/// timeout) the fallback endpoint is tried once.
pub struct SnapshotClient<A: MarketApi> {
    api: A,
    interval: String,
    window_len: usize,
}

impl<A: MarketApi> SnapshotClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            interval: DEFAULT_CANDLE_INTERVAL.to_string(),
            window_len: DEFAULT_WINDOW_LEN,
        }
    }

    /// Overrides the candle interval and window length.
    pub fn with_window(mut self, interval: impl Into<String>, window_len: usize) -> Self {
        self.interval = interval.into();
        self.window_len = window_len;
        self
    }

    pub fn name(&self) -> &'static str {
        self.api.name()
    }

    /// Fetches a market snapshot, falling back to the secondary endpoint
    /// if the primary fails.
    pub async fn fetch(&self, symbol: &str) -> Result<MarketSnapshot> {
        let source = self.api.name().to_lowercase();

        match self.try_fetch(self.api.endpoint(), symbol, &source).await {
            Ok(snapshot) => Ok(snapshot),
            Err(primary_err) => {
                let Some(fallback) = self.api.fallback_endpoint() else {
                    return Err(primary_err);
                };

                warn!(
                    exchange = self.api.name(),
                    error = %primary_err,
                    "primary endpoint failed, trying fallback"
                );

                let fallback_source = format!("{source}-fallback");
                self.try_fetch(fallback, symbol, &fallback_source).await
            }
        }
    }

    async fn try_fetch(&self, endpoint: &str, symbol: &str, source: &str) -> Result<MarketSnapshot> {
        tokio::time::timeout(FETCH_TIMEOUT, self.fetch_from(endpoint, symbol, source))
            .await
            .map_err(|_| anyhow!("[{}] snapshot fetch timed out", self.api.name()))?
    }

    async fn fetch_from(&self, endpoint: &str, symbol: &str, source: &str) -> Result<MarketSnapshot> {
        info!(exchange = self.api.name(), endpoint, symbol, "fetching market snapshot");

        let (ws_stream, _response) = connect_async(endpoint)
            .await
            .with_context(|| format!("[{}] failed to connect to {}", self.api.name(), endpoint))?;
        let (mut write, mut read) = ws_stream.split();

        write
            .send(Message::Text(self.api.format_spot_request(symbol).into()))
            .await?;
        write
            .send(Message::Text(
                self.api
                    .format_klines_request(symbol, &self.interval, self.window_len)
                    .into(),
            ))
            .await?;

        let mut spot_price = None;
        let mut candles = None;

        while let Some(message) = read.next().await {
            match message? {
                Message::Text(text) => {
                    if spot_price.is_none() {
                        if let Some(price) = self.api.parse_spot_response(&text) {
                            spot_price = Some(price);
                        }
                    }
                    if candles.is_none() {
                        if let Some(window) = self.api.parse_klines_response(&text) {
                            candles = Some(window);
                        }
                    }
                    if spot_price.is_some() && candles.is_some() {
                        break;
                    }
                }
                Message::Ping(_) | Message::Pong(_) => {
                    // Pong replies are handled by tungstenite
                }
                Message::Close(frame) => {
                    debug!(exchange = self.api.name(), ?frame, "connection closed");
                    break;
                }
                _ => {}
            }
        }

        let spot_price = spot_price
            .with_context(|| format!("[{}] no spot price in responses", self.api.name()))?;
        let candles =
            candles.with_context(|| format!("[{}] no candle window in responses", self.api.name()))?;

        if candles.len() < RECOMMENDED_MIN_WINDOW {
            warn!(
                exchange = self.api.name(),
                got = candles.len(),
                want = RECOMMENDED_MIN_WINDOW,
                "short candle window, indicators will degrade"
            );
        }

        Ok(MarketSnapshot::new(
            symbol,
            spot_price,
            source,
            chrono::Utc::now().timestamp_millis() as u64,
            candles,
        ))
    }
}
