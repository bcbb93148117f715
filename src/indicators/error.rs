use thiserror::Error;

/// Indicator snapshot rejected before scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidIndicatorsError {
    #[error("indicator `{field}` is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("indicator `{field}` must not be negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("20-day average volume is zero")]
    ZeroAverageVolume,
}

impl InvalidIndicatorsError {
    pub fn field(&self) -> &'static str {
        match self {
            InvalidIndicatorsError::NonFinite { field, .. }
            | InvalidIndicatorsError::Negative { field, .. } => field,
            InvalidIndicatorsError::ZeroAverageVolume => "avgVolume20",
        }
    }
}
