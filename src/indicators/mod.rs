pub mod engine;
pub mod error;

pub mod momentum;
pub mod trend;
pub mod volume;

pub use engine::*;
pub use error::IndicatorError;
