//! Heuristic scoring of indicator snapshots.

pub mod additive;
pub mod conjunction;
pub mod engine;
pub mod policy;
pub mod scoring;
pub mod trend_score;

pub use additive::{AdditivePolicy, AdditiveWeights};
pub use conjunction::ConjunctionPolicy;
pub use engine::SignalEngine;
pub use policy::{Assessment, Scorer, ScoringPolicy};
pub use scoring::ConfidenceBounds;
pub use trend_score::TrendScorePolicy;
