use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Insufficient data: need at least {required} candles, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Degenerate computation: {0}")]
    ComputationDegenerate(String),
}

impl IndicatorError {
    pub fn kind(&self) -> &'static str {
        match self {
            IndicatorError::InsufficientData { .. } => "insufficient_data",
            IndicatorError::ComputationDegenerate(_) => "computation_degenerate",
        }
    }
}
