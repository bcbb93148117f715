//! Classification output types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStatus {
    ConfirmedUptrend,
    ReboundUnconfirmed,
    FakeoutBearish,
    ConfirmedDowntrend,
}

impl TrendStatus {
    pub fn all() -> [TrendStatus; 4] {
        [
            TrendStatus::ConfirmedUptrend,
            TrendStatus::ReboundUnconfirmed,
            TrendStatus::FakeoutBearish,
            TrendStatus::ConfirmedDowntrend,
        ]
    }

    /// Wire name, also used as the metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStatus::ConfirmedUptrend => "CONFIRMED_UPTREND",
            TrendStatus::ReboundUnconfirmed => "REBOUND_UNCONFIRMED",
            TrendStatus::FakeoutBearish => "FAKEOUT_BEARISH",
            TrendStatus::ConfirmedDowntrend => "CONFIRMED_DOWNTREND",
        }
    }
}

/// RSI momentum tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RsiTier {
    Bull,
    Neutral,
    Bear,
}

/// Close relative to the Bollinger middle band.
///
/// `At` is part of the wire schema but the classifier only ever produces
/// `Above` or `Below`; a close equal to the middle band reports `Below`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BollingerPosition {
    Above,
    At,
    Below,
}

/// Which individual signals passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDetails {
    pub sma50: bool,
    pub sma20: bool,
    pub volume: bool,
    pub rsi: RsiTier,
    pub macd: bool,
    pub bollinger: BollingerPosition,
}

impl TrendDetails {
    /// Number of signals counted as fully bullish.
    pub fn passed_count(&self) -> usize {
        [
            self.sma50,
            self.sma20,
            self.volume,
            self.rsi == RsiTier::Bull,
            self.macd,
            self.bollinger == BollingerPosition::Above,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Conviction score in [0, 10], one decimal place.
    pub score: f64,
    pub status: TrendStatus,
    pub details: TrendDetails,
}
