use crate::indicators::error::InvalidIndicatorsError;
use crate::models::indicators::{BollingerBandsIndicator, MacdIndicator, TechnicalIndicators};

pub fn validate_finite(field: &'static str, value: f64) -> Result<(), InvalidIndicatorsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidIndicatorsError::NonFinite { field, value })
    }
}

/// Finite and not below zero.
pub fn validate_price(field: &'static str, value: f64) -> Result<(), InvalidIndicatorsError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(InvalidIndicatorsError::Negative { field, value });
    }
    Ok(())
}

pub fn validate_macd(macd: &MacdIndicator) -> Result<(), InvalidIndicatorsError> {
    validate_finite("macd.line", macd.line)?;
    validate_finite("macd.signal", macd.signal)?;
    validate_finite("macd.histogram", macd.histogram)
}

pub fn validate_bollinger(bands: &BollingerBandsIndicator) -> Result<(), InvalidIndicatorsError> {
    validate_price("bollinger.upper", bands.upper)?;
    validate_price("bollinger.middle", bands.middle)?;
    validate_price("bollinger.lower", bands.lower)
}

/// Reject snapshots that would push NaN or infinities into the score.
///
/// RSI is only required to be finite; the [0, 100] range is a provider
/// convention and is not enforced.
pub fn validate_indicators(indicators: &TechnicalIndicators) -> Result<(), InvalidIndicatorsError> {
    validate_price("close", indicators.close)?;
    validate_finite("changePercent", indicators.change_percent)?;
    validate_price("sma50", indicators.sma50)?;
    validate_price("sma20", indicators.sma20)?;
    if indicators.avg_volume_20 == 0 {
        return Err(InvalidIndicatorsError::ZeroAverageVolume);
    }
    validate_finite("rsi", indicators.rsi)?;
    validate_macd(&indicators.macd)?;
    validate_bollinger(&indicators.bollinger)
}
