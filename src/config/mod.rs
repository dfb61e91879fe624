//! Environment-driven configuration

use crate::indicators::MIN_CANDLES;
use crate::signals::ScoringPolicy;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HISTORY_LIMIT: usize = 120;
pub const DEFAULT_SYMBOL_CACHE_TTL_SECONDS: u64 = 3600;
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Get the current deployment environment (`ENVIRONMENT`, defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|e| e.trim().to_lowercase())
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Which market data provider backs `/predict`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Yahoo,
    Simulated,
}

impl DataSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "yahoo" => Some(Self::Yahoo),
            "simulated" | "random" => Some(Self::Simulated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_source: DataSource,
    pub yahoo_base_url: String,
    pub history_limit: usize,
    pub symbol_list_url: Option<String>,
    pub symbols: Vec<String>,
    pub symbol_cache_ttl: Duration,
    pub default_policy: ScoringPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_source: DataSource::Yahoo,
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            symbol_list_url: None,
            symbols: default_symbols(),
            symbol_cache_ttl: Duration::from_secs(DEFAULT_SYMBOL_CACHE_TTL_SECONDS),
            default_policy: ScoringPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let data_source = match env::var("DATA_SOURCE") {
            Ok(raw) => DataSource::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown DATA_SOURCE, using yahoo");
                DataSource::Yahoo
            }),
            Err(_) => defaults.data_source,
        };

        let history_limit = env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|l| l.parse().ok())
            .map(history_limit_at_least_min)
            .unwrap_or(defaults.history_limit);

        let symbol_cache_ttl = env::var("SYMBOL_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.symbol_cache_ttl);

        let symbols = env::var("SYMBOLS")
            .ok()
            .map(|s| parse_symbol_list(&s))
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.symbols);

        let default_policy = match env::var("DEFAULT_POLICY") {
            Ok(raw) => ScoringPolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown DEFAULT_POLICY, using conjunction");
                ScoringPolicy::default()
            }),
            Err(_) => defaults.default_policy,
        };

        Self {
            port,
            data_source,
            yahoo_base_url: env::var("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            history_limit,
            symbol_list_url: env::var("SYMBOL_LIST_URL").ok().filter(|u| !u.trim().is_empty()),
            symbols,
            symbol_cache_ttl,
            default_policy,
        }
    }
}

/// Raise a history limit below [`MIN_CANDLES`], which could never produce a verdict
pub fn history_limit_at_least_min(limit: usize) -> usize {
    if limit < MIN_CANDLES {
        tracing::warn!(
            requested = limit,
            minimum = MIN_CANDLES,
            "HISTORY_LIMIT below indicator lookback, raising it"
        );
        return MIN_CANDLES;
    }
    limit
}

/// Split a comma separated symbol list, dropping blanks
pub fn parse_symbol_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn default_symbols() -> Vec<String> {
    ["^NSEI", "^BSESN", "AAPL", "MSFT", "RELIANCE.NS", "TCS.NS"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
