//! Runtime configuration and classifier thresholds.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read classifier config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid classifier config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid classifier config: {0}")]
    Invalid(String),

    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Points awarded per passing signal. Defaults sum to 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub sma50: f64,
    pub sma20: f64,
    pub volume: f64,
    pub rsi_bull: f64,
    pub rsi_neutral: f64,
    pub macd: f64,
    pub bollinger: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            sma50: 2.0,
            sma20: 2.0,
            volume: 2.0,
            rsi_bull: 2.0,
            rsi_neutral: 0.5,
            macd: 1.0,
            bollinger: 1.0,
        }
    }
}

impl SignalWeights {
    /// Highest score these weights can produce.
    pub fn max_score(&self) -> f64 {
        self.sma50
            + self.sma20
            + self.volume
            + self.rsi_bull.max(self.rsi_neutral)
            + self.macd
            + self.bollinger
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("sma50", self.sma50),
            ("sma20", self.sma20),
            ("volume", self.volume),
            ("rsi_bull", self.rsi_bull),
            ("rsi_neutral", self.rsi_neutral),
            ("macd", self.macd),
            ("bollinger", self.bollinger),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weight {} must be finite and non-negative, got: {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

/// Signal cutoffs and status bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Volume must reach this percentage of the 20-day average (inclusive).
    pub volume_surge_pct: u32,
    /// RSI at or above this is `Bull`.
    pub rsi_bull: f64,
    /// RSI below this is `Bear`; also the weak-momentum cutoff for fakeouts.
    pub rsi_bear: f64,
    pub uptrend_score: f64,
    pub rebound_score: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            volume_surge_pct: 110,
            rsi_bull: 53.0,
            rsi_bear: 45.0,
            uptrend_score: 8.5,
            rebound_score: 4.5,
        }
    }
}

impl TrendThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.volume_surge_pct == 0 {
            return Err(ConfigError::Invalid(
                "volume_surge_pct must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("rsi_bull", self.rsi_bull),
            ("rsi_bear", self.rsi_bear),
            ("uptrend_score", self.uptrend_score),
            ("rebound_score", self.rebound_score),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite, got: {}",
                    name, value
                )));
            }
        }
        if self.rsi_bear > self.rsi_bull {
            return Err(ConfigError::Invalid(format!(
                "rsi_bear ({}) must not exceed rsi_bull ({})",
                self.rsi_bear, self.rsi_bull
            )));
        }
        if self.rebound_score > self.uptrend_score {
            return Err(ConfigError::Invalid(format!(
                "rebound_score ({}) must not exceed uptrend_score ({})",
                self.rebound_score, self.uptrend_score
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub weights: SignalWeights,
    #[serde(default)]
    pub thresholds: TrendThresholds,
}

impl ClassifierConfig {
    pub fn new(weights: SignalWeights, thresholds: TrendThresholds) -> Result<Self, ConfigError> {
        let config = Self {
            weights,
            thresholds,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Deployment environment name, `sandbox` unless `ENVIRONMENT` is set.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub classifier: ClassifierConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "sandbox".to_string(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl AppConfig {
    /// `PORT`, `ENVIRONMENT` and an optional `CLASSIFIER_CONFIG` JSON path.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnv { var: "PORT", value })?,
            Err(_) => 8080,
        };

        let classifier = match env::var("CLASSIFIER_CONFIG") {
            Ok(path) if !path.trim().is_empty() => ClassifierConfig::from_file(path.trim())?,
            _ => ClassifierConfig::default(),
        };

        Ok(Self {
            port,
            environment: get_environment(),
            classifier,
        })
    }
}
