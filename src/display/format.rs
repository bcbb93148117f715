//! Number formatting and the technical matrix rows.

use crate::display::labels::bollinger_label;
use crate::models::indicators::TechnicalIndicators;
use crate::models::trend::{BollingerPosition, RsiTier, TrendAnalysis};
use serde::Serialize;

/// `56.0M` from one million upward, otherwise thousands-separated.
pub fn format_volume(volume: u64) -> String {
    if volume >= 1_000_000 {
        return format!("{:.1}M", volume as f64 / 1_000_000.0);
    }
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Today's volume over the 20-day average, `None` when the average is zero.
pub fn volume_ratio(volume: u64, avg_volume: u64) -> Option<f64> {
    if avg_volume == 0 {
        None
    } else {
        Some(volume as f64 / avg_volume as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FearGreedBand {
    Unavailable,
    ExtremeGreed,
    Greed,
    Neutral,
    Fear,
    ExtremeFear,
}

impl FearGreedBand {
    pub fn from_index(value: Option<u8>) -> Self {
        match value {
            None => FearGreedBand::Unavailable,
            Some(v) if v >= 75 => FearGreedBand::ExtremeGreed,
            Some(v) if v >= 56 => FearGreedBand::Greed,
            Some(v) if v >= 45 => FearGreedBand::Neutral,
            Some(v) if v >= 25 => FearGreedBand::Fear,
            Some(_) => FearGreedBand::ExtremeFear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FearGreedBand::Unavailable => "---",
            FearGreedBand::ExtremeGreed => "Extreme Greed",
            FearGreedBand::Greed => "Greed",
            FearGreedBand::Neutral => "Neutral",
            FearGreedBand::Fear => "Fear",
            FearGreedBand::ExtremeFear => "Extreme Fear",
        }
    }
}

/// Market-wide sentiment shown next to the per-asset reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSentiment {
    pub fear_greed_index: Option<u8>,
    pub band: FearGreedBand,
    pub label: &'static str,
}

impl MarketSentiment {
    pub fn from_index(value: Option<u8>) -> Self {
        let band = FearGreedBand::from_index(value);
        Self {
            fear_greed_index: value,
            band,
            label: band.label(),
        }
    }
}

/// One row of the technical confirmation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub indicator: &'static str,
    pub value: String,
    pub passed: bool,
    pub criterion: &'static str,
}

fn comparison(close: f64, level: f64, passed: bool) -> String {
    format!("{} {} {}", close, if passed { ">" } else { "<" }, level)
}

pub fn technical_matrix(indicators: &TechnicalIndicators, analysis: &TrendAnalysis) -> Vec<MatrixRow> {
    let details = &analysis.details;
    let ratio = volume_ratio(indicators.volume, indicators.avg_volume_20)
        .map(|r| format!("{:.2}x", r))
        .unwrap_or_else(|| "n/a".to_string());

    vec![
        MatrixRow {
            indicator: "Close vs SMA50",
            value: comparison(indicators.close, indicators.sma50, details.sma50),
            passed: details.sma50,
            criterion: "Price > SMA50 = trend up",
        },
        MatrixRow {
            indicator: "Close vs SMA20",
            value: comparison(indicators.close, indicators.sma20, details.sma20),
            passed: details.sma20,
            criterion: "Short-term momentum",
        },
        MatrixRow {
            indicator: "Volume vs 20d avg",
            value: format!("{} ({})", format_volume(indicators.volume), ratio),
            passed: details.volume,
            criterion: ">= 1.1x average volume",
        },
        MatrixRow {
            indicator: "RSI (14)",
            value: format!("{}", indicators.rsi),
            passed: details.rsi == RsiTier::Bull,
            criterion: ">= 53 strong, < 45 weak",
        },
        MatrixRow {
            indicator: "MACD cross",
            value: if details.macd { "Bullish" } else { "Bearish" }.to_string(),
            passed: details.macd,
            criterion: "MACD line > signal",
        },
        MatrixRow {
            indicator: "Bollinger position",
            value: bollinger_label(details.bollinger).to_string(),
            passed: details.bollinger == BollingerPosition::Above,
            criterion: "Above middle band preferred",
        },
    ]
}
