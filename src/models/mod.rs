//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod trend;

pub use indicators::{AssetData, BollingerBandsIndicator, MacdIndicator, TechnicalIndicators};
pub use trend::{BollingerPosition, RsiTier, TrendAnalysis, TrendDetails, TrendStatus};
