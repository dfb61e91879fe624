//! External collaborators: market data and symbol lists

pub mod market_data;
pub mod simulated;
pub mod symbols;
pub mod yahoo;

pub use market_data::{MarketDataError, MarketDataProvider};
pub use simulated::SimulatedProvider;
pub use symbols::{HttpSymbolSource, StaticSymbolSource, SymbolDirectory, SymbolSource};
pub use yahoo::YahooProvider;
