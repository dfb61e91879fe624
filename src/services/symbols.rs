//! Symbol list with a read-through TTL cache

use crate::services::market_data::MarketDataError;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

const SYMBOL_LIST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait::async_trait]
pub trait SymbolSource: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, MarketDataError>;
}

/// Fixed list, typically from configuration
pub struct StaticSymbolSource {
    symbols: Vec<String>,
}

impl StaticSymbolSource {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

#[async_trait::async_trait]
impl SymbolSource for StaticSymbolSource {
    async fn load(&self) -> Result<Vec<String>, MarketDataError> {
        Ok(self.symbols.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SymbolPayload {
    Plain(Vec<String>),
    Records(Vec<SymbolRecord>),
    Wrapped { symbols: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct SymbolRecord {
    #[serde(alias = "SYMBOL", alias = "ticker")]
    symbol: String,
}

/// JSON symbol list served at a URL
pub struct HttpSymbolSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSymbolSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SYMBOL_LIST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(url, client)
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Accepts `["A", "B"]`, `[{"symbol": "A"}]` or `{"symbols": ["A"]}`
pub fn parse_symbol_payload(body: &str) -> Result<Vec<String>, MarketDataError> {
    let payload: SymbolPayload = serde_json::from_str(body)
        .map_err(|e| MarketDataError::MalformedPayload(e.to_string()))?;

    let raw = match payload {
        SymbolPayload::Plain(symbols) | SymbolPayload::Wrapped { symbols } => symbols,
        SymbolPayload::Records(records) => records.into_iter().map(|r| r.symbol).collect(),
    };

    let mut symbols: Vec<String> = raw
        .into_iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    symbols.sort();
    symbols.dedup();
    Ok(symbols)
}

#[async_trait::async_trait]
impl SymbolSource for HttpSymbolSource {
    async fn load(&self) -> Result<Vec<String>, MarketDataError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MarketDataError::Network(format!(
                "symbol list returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;
        parse_symbol_payload(&body)
    }
}

struct CachedSymbols {
    symbols: Vec<String>,
    last_refresh: Instant,
}

pub struct SymbolDirectory {
    source: Arc<dyn SymbolSource>,
    ttl: Duration,
    cache: RwLock<Option<CachedSymbols>>,
    /// Held for the duration of a load so only one refresh runs at a time
    refresh: Mutex<()>,
}

impl SymbolDirectory {
    pub fn new(source: Arc<dyn SymbolSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Cached symbols, refreshed from the source once the TTL has elapsed.
    ///
    /// While a refresh is running, other callers get the stale list instead of
    /// waiting on it. A failed refresh keeps the stale list and restarts its TTL,
    /// so the source is not retried on every request during an outage.
    pub async fn symbols(&self) -> Result<Vec<String>, MarketDataError> {
        let stale = match self.cached().await {
            Lookup::Fresh(symbols) => return Ok(symbols),
            Lookup::Stale(symbols) => Some(symbols),
            Lookup::Empty => None,
        };

        let _refresh = match self.refresh.try_lock() {
            Ok(guard) => guard,
            Err(_) => match stale {
                Some(symbols) => {
                    debug!("SymbolDirectory: refresh in progress, serving stale list");
                    return Ok(symbols);
                }
                None => self.refresh.lock().await,
            },
        };

        // another caller may have finished a refresh while we waited
        if let Lookup::Fresh(symbols) = self.cached().await {
            return Ok(symbols);
        }

        let result = self.source.load().await;
        let mut cache = self.cache.write().await;
        match result {
            Ok(symbols) => {
                info!(count = symbols.len(), "SymbolDirectory: refreshed symbol list");
                *cache = Some(CachedSymbols {
                    symbols: symbols.clone(),
                    last_refresh: Instant::now(),
                });
                Ok(symbols)
            }
            Err(e) => match cache.as_mut() {
                Some(stale) => {
                    warn!(error = %e, "SymbolDirectory: refresh failed, serving stale list");
                    stale.last_refresh = Instant::now();
                    Ok(stale.symbols.clone())
                }
                None => Err(e),
            },
        }
    }

    async fn cached(&self) -> Lookup {
        let cache = self.cache.read().await;
        match cache.as_ref() {
            Some(cached) if cached.last_refresh.elapsed() < self.ttl => {
                Lookup::Fresh(cached.symbols.clone())
            }
            Some(cached) => Lookup::Stale(cached.symbols.clone()),
            None => Lookup::Empty,
        }
    }

    /// Drop the cached list so the next read reloads it
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}

enum Lookup {
    Fresh(Vec<String>),
    Stale(Vec<String>),
    Empty,
}
