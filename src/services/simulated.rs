//! Deterministic random-walk candles for offline use

use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Default)]
pub struct SimulatedProvider {
    seed: u64,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Daily candles ending today; prices depend only on seed and symbol
    pub fn generate(&self, symbol: &str, count: usize) -> Vec<Candle> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ symbol_seed(symbol));
        let end = Utc::now();
        let mut close: f64 = rng.gen_range(50.0..1500.0);
        let mut candles = Vec::with_capacity(count);

        for i in 0..count {
            let open = close;
            let change: f64 = rng.gen_range(-0.02..0.02);
            close = (open * (1.0 + change)).max(0.01);
            let wick: f64 = rng.gen_range(0.0..0.01);
            let high = open.max(close) * (1.0 + wick);
            let low = open.min(close) * (1.0 - wick);
            let volume: f64 = rng.gen_range(100_000.0..1_000_000.0);
            let timestamp = end - Duration::days((count - 1 - i) as i64);
            candles.push(Candle::new(open, high, low, close, volume, timestamp));
        }
        candles
    }
}

/// FNV-1a over the symbol bytes
fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

#[async_trait::async_trait]
impl MarketDataProvider for SimulatedProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        if symbol.trim().is_empty() {
            return Err(MarketDataError::UnknownSymbol(symbol.to_string()));
        }
        Ok(self.generate(symbol, limit))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
