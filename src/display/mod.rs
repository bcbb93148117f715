//! Presentation mappers keyed off the classification result.

pub mod format;
pub mod labels;
pub mod levels;
pub mod report;

pub use format::{
    format_volume, technical_matrix, volume_ratio, FearGreedBand, MarketSentiment, MatrixRow,
};
pub use labels::*;
pub use levels::{render_levels, KeyLevels};
pub use report::TrendReport;
