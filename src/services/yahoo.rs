//! Yahoo Finance chart API provider

use crate::config::DEFAULT_YAHOO_BASE_URL;
use crate::models::indicators::Candle;
use crate::services::market_data::{tail, MarketDataError, MarketDataProvider};
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_RANGE: &str = "1y";
const DEFAULT_MAX_RETRIES: usize = 2;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
    range: String,
    max_retries: usize,
    retry_delay: Duration,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new(DEFAULT_YAHOO_BASE_URL)
    }
}

impl YahooProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            range: DEFAULT_RANGE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(500),
        }
    }

    /// Override how many times transient failures are retried and the first delay
    pub fn with_retry(mut self, max_retries: usize, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Chart URL with the symbol as a single escaped path segment
    pub fn chart_url(&self, symbol: &str) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            MarketDataError::InvalidRequest(format!("bad base url {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                MarketDataError::InvalidRequest(format!("base url {} cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("range", &self.range)
            .append_pair("interval", "1d")
            .append_pair("events", "history");
        Ok(url)
    }

    async fn fetch_once(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.chart_url(symbol)?;
        debug!(symbol = %symbol, url = %url, "YahooProvider: requesting chart");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::UnknownSymbol(symbol.to_string()));
        }
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::Network(format!(
                "upstream returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(MarketDataError::MalformedPayload(format!(
                "unexpected upstream status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        parse_chart(symbol, &body)
    }
}

/// Parse a v8 chart payload into chronologically ordered candles.
///
/// Rows with any missing OHLCV field are skipped.
pub fn parse_chart(symbol: &str, body: &str) -> Result<Vec<Candle>, MarketDataError> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::MalformedPayload(e.to_string()))?;

    if let Some(error) = response.chart.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Err(MarketDataError::UnknownSymbol(symbol.to_string()));
        }
        return Err(MarketDataError::MalformedPayload(format!(
            "{}: {}",
            error.code, error.description
        )));
    }

    let data = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;
    let quote = data
        .indicators
        .quote
        .first()
        .ok_or_else(|| MarketDataError::MalformedPayload("missing quote block".to_string()))?;

    let mut candles = Vec::with_capacity(data.timestamp.len());
    for (i, &ts) in data.timestamp.iter().enumerate() {
        let field = |series: &Vec<Option<f64>>| series.get(i).copied().flatten();
        let row = (
            field(&quote.open),
            field(&quote.high),
            field(&quote.low),
            field(&quote.close),
            field(&quote.volume),
            DateTime::from_timestamp(ts, 0),
        );
        if let (Some(o), Some(h), Some(l), Some(c), Some(v), Some(time)) = row {
            candles.push(Candle::new(o, h, l, c, v, time));
        }
    }

    if candles.is_empty() {
        return Err(MarketDataError::NoData(symbol.to_string()));
    }

    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry_delay)
            .with_max_times(self.max_retries);

        let candles = (|| async { self.fetch_once(symbol).await })
            .retry(backoff)
            .when(|e: &MarketDataError| e.is_transient())
            .notify(|e: &MarketDataError, after: Duration| {
                warn!(symbol = %symbol, error = %e, retry_in_ms = after.as_millis() as u64, "YahooProvider: retrying chart request");
            })
            .await?;

        Ok(tail(candles, limit))
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}
