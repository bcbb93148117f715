use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Snapshot of the indicators for one instrument at one point in time.
///
/// Values are supplied by an indicator provider; nothing here is computed
/// from price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub close: f64,
    /// Display only, never scored.
    #[serde(default)]
    pub change_percent: f64,
    pub sma50: f64,
    pub sma20: f64,
    pub volume: u64,
    #[serde(rename = "avgVolume20")]
    pub avg_volume_20: u64,
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub bollinger: BollingerBandsIndicator,
}

/// An instrument together with its indicator snapshot and key price levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    pub symbol: String,
    pub name: String,
    pub indicators: TechnicalIndicators,
    #[serde(default)]
    pub support_levels: Vec<f64>,
    #[serde(default)]
    pub resistance_levels: Vec<f64>,
}

impl AssetData {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, indicators: TechnicalIndicators) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            indicators,
            support_levels: Vec::new(),
            resistance_levels: Vec::new(),
        }
    }

    pub fn with_support_levels(mut self, levels: Vec<f64>) -> Self {
        self.support_levels = levels;
        self
    }

    pub fn with_resistance_levels(mut self, levels: Vec<f64>) -> Self {
        self.resistance_levels = levels;
        self
    }
}
