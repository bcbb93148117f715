//! Indicator provider interface and the built-in fixture provider.

use crate::models::indicators::{
    AssetData, BollingerBandsIndicator, MacdIndicator, TechnicalIndicators,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}

pub trait IndicatorProvider: Send + Sync {
    /// Symbols this provider can supply, in display order.
    fn symbols(&self) -> Vec<String>;

    /// Latest indicator snapshot and key levels for a symbol.
    fn get_asset(&self, symbol: &str) -> Result<AssetData, ProviderError>;

    /// Market-wide Fear & Greed reading (0-100), if the provider has one.
    fn fear_greed_index(&self) -> Option<u8> {
        None
    }
}

/// Serves a fixed set of assets. Symbol lookup ignores case.
#[derive(Debug, Clone, Default)]
pub struct MockIndicatorProvider {
    assets: Vec<AssetData>,
    fear_greed_index: Option<u8>,
}

impl MockIndicatorProvider {
    /// QQQ and SPY fixtures.
    pub fn new() -> Self {
        Self::empty().with_asset(qqq_fixture()).with_asset(spy_fixture())
    }

    pub fn empty() -> Self {
        Self {
            assets: Vec::new(),
            fear_greed_index: None,
        }
    }

    /// Add an asset, replacing any existing entry for the same symbol.
    pub fn with_asset(mut self, asset: AssetData) -> Self {
        self.assets
            .retain(|a| !a.symbol.eq_ignore_ascii_case(&asset.symbol));
        self.assets.push(asset);
        self
    }

    pub fn with_fear_greed_index(mut self, value: u8) -> Self {
        self.fear_greed_index = Some(value.min(100));
        self
    }
}

impl IndicatorProvider for MockIndicatorProvider {
    fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }

    fn get_asset(&self, symbol: &str) -> Result<AssetData, ProviderError> {
        self.assets
            .iter()
            .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
            .cloned()
            .ok_or_else(|| ProviderError::UnknownSymbol(symbol.to_string()))
    }

    fn fear_greed_index(&self) -> Option<u8> {
        self.fear_greed_index
    }
}

/// Slightly bullish: above SMA50, below SMA20, volume short of 1.1x.
pub fn qqq_fixture() -> AssetData {
    AssetData::new(
        "QQQ",
        "Invesco QQQ Trust",
        TechnicalIndicators {
            close: 608.89,
            change_percent: 0.62,
            sma50: 607.75,
            sma20: 612.93,
            volume: 56_000_000,
            avg_volume_20: 61_000_000,
            rsi: 54.56,
            macd: MacdIndicator {
                line: 1.5,
                signal: 1.4,
                histogram: 0.1,
            },
            bollinger: BollingerBandsIndicator {
                upper: 620.0,
                middle: 605.0,
                lower: 590.0,
            },
        },
    )
    .with_support_levels(vec![602.0, 597.0])
    .with_resistance_levels(vec![610.0, 615.0])
}

pub fn spy_fixture() -> AssetData {
    AssetData::new(
        "SPY",
        "SPDR S&P 500 ETF",
        TechnicalIndicators {
            close: 675.02,
            change_percent: 0.94,
            sma50: 669.61,
            sma20: 673.11,
            volume: 80_000_000,
            avg_volume_20: 83_000_000,
            rsi: 50.3,
            macd: MacdIndicator {
                line: 2.2,
                signal: 2.0,
                histogram: 0.2,
            },
            bollinger: BollingerBandsIndicator {
                upper: 685.0,
                middle: 670.0,
                lower: 655.0,
            },
        },
    )
    .with_support_levels(vec![668.0, 660.0])
    .with_resistance_levels(vec![676.0, 680.0])
}
