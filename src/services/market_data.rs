//! Market data provider interface

use crate::models::indicators::Candle;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketDataError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("No data returned for {0}")]
    NoData(String),

    #[error("Invalid upstream request: {0}")]
    InvalidRequest(String),
}

impl MarketDataError {
    pub fn kind(&self) -> &'static str {
        match self {
            MarketDataError::Network(_) => "network",
            MarketDataError::MalformedPayload(_) => "malformed_payload",
            MarketDataError::UnknownSymbol(_) => "unknown_symbol",
            MarketDataError::NoData(_) => "no_data",
            MarketDataError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, MarketDataError::Network(_))
    }
}

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get the most recent `limit` candles for a symbol, oldest first
    async fn get_candles(&self, symbol: &str, limit: usize)
        -> Result<Vec<Candle>, MarketDataError>;

    fn name(&self) -> &'static str;
}

/// Keep only the newest `limit` candles
pub fn tail(mut candles: Vec<Candle>, limit: usize) -> Vec<Candle> {
    if candles.len() > limit {
        candles.drain(..candles.len() - limit);
    }
    candles
}
