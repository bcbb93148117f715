//! Per-signal checks and additive point accumulation

use crate::config::{SignalWeights, TrendThresholds};
use crate::models::indicators::{MacdIndicator, TechnicalIndicators};
use crate::models::trend::{BollingerPosition, RsiTier, TrendDetails};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Strictly above; equality fails.
pub fn is_above(close: f64, level: f64) -> bool {
    close > level
}

/// `volume >= avg_volume * surge_pct / 100`, computed in integers so the
/// boundary itself passes.
pub fn volume_confirmed(volume: u64, avg_volume: u64, surge_pct: u32) -> bool {
    (volume as u128) * 100 >= (avg_volume as u128) * (surge_pct as u128)
}

pub fn rsi_tier(rsi: f64, thresholds: &TrendThresholds) -> RsiTier {
    if rsi >= thresholds.rsi_bull {
        RsiTier::Bull
    } else if rsi >= thresholds.rsi_bear {
        RsiTier::Neutral
    } else {
        RsiTier::Bear
    }
}

/// Line strictly above signal.
pub fn macd_bullish(macd: &MacdIndicator) -> bool {
    macd.line > macd.signal
}

/// Two-way split: `Above` when strictly above the middle band, otherwise
/// `Below`. `At` is never produced.
pub fn bollinger_position(close: f64, middle: f64) -> BollingerPosition {
    if close > middle {
        BollingerPosition::Above
    } else {
        BollingerPosition::Below
    }
}

pub fn evaluate_details(indicators: &TechnicalIndicators, thresholds: &TrendThresholds) -> TrendDetails {
    TrendDetails {
        sma50: is_above(indicators.close, indicators.sma50),
        sma20: is_above(indicators.close, indicators.sma20),
        volume: volume_confirmed(
            indicators.volume,
            indicators.avg_volume_20,
            thresholds.volume_surge_pct,
        ),
        rsi: rsi_tier(indicators.rsi, thresholds),
        macd: macd_bullish(&indicators.macd),
        bollinger: bollinger_position(indicators.close, indicators.bollinger.middle),
    }
}

pub fn rsi_points(tier: RsiTier, weights: &SignalWeights) -> f64 {
    match tier {
        RsiTier::Bull => weights.rsi_bull,
        RsiTier::Neutral => weights.rsi_neutral,
        RsiTier::Bear => 0.0,
    }
}

pub fn bollinger_points(position: BollingerPosition, weights: &SignalWeights) -> f64 {
    match position {
        BollingerPosition::Above => weights.bollinger,
        BollingerPosition::At | BollingerPosition::Below => 0.0,
    }
}

/// Unclamped, unrounded sum of the awarded points.
pub fn raw_score(details: &TrendDetails, weights: &SignalWeights) -> f64 {
    let mut score = 0.0;
    if details.sma50 {
        score += weights.sma50;
    }
    if details.sma20 {
        score += weights.sma20;
    }
    if details.volume {
        score += weights.volume;
    }
    score += rsi_points(details.rsi, weights);
    if details.macd {
        score += weights.macd;
    }
    score += bollinger_points(details.bollinger, weights);
    score
}

/// Clamp to [0, 10] and round to one decimal place.
pub fn finalize_score(raw: f64) -> f64 {
    let rounded = (raw * 10.0).round() / 10.0;
    rounded.clamp(MIN_SCORE, MAX_SCORE)
}
