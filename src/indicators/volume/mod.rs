//! Volume indicators

pub mod volume_ma;

pub use volume_ma::*;
