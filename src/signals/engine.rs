//! Trend classification engine.

use crate::config::ClassifierConfig;
use crate::indicators::{validate_indicators, InvalidIndicatorsError};
use crate::models::indicators::{AssetData, TechnicalIndicators};
use crate::models::trend::TrendAnalysis;
use crate::signals::decision::decide_status;
use crate::signals::scoring::{evaluate_details, finalize_score, raw_score};
use tracing::debug;

/// Stateless classifier; every call is independent of the previous one.
#[derive(Debug, Clone, Default)]
pub struct TrendClassifier {
    config: ClassifierConfig,
}

impl TrendClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Score and classify one indicator snapshot.
    ///
    /// Non-finite values, negative prices and a zero average volume are
    /// rejected instead of producing a misleading score.
    pub fn classify(
        &self,
        indicators: &TechnicalIndicators,
    ) -> Result<TrendAnalysis, InvalidIndicatorsError> {
        validate_indicators(indicators)?;

        let details = evaluate_details(indicators, &self.config.thresholds);
        let raw = raw_score(&details, &self.config.weights);
        // Status bands see the reported score so the two never disagree.
        let score = finalize_score(raw);
        let status = decide_status(score, indicators, &self.config.thresholds);

        debug!(
            score = score,
            status = status.as_str(),
            passed = details.passed_count(),
            "Trend classified"
        );

        Ok(TrendAnalysis {
            score,
            status,
            details,
        })
    }

    pub fn classify_asset(&self, asset: &AssetData) -> Result<TrendAnalysis, InvalidIndicatorsError> {
        self.classify(&asset.indicators).map_err(|e| {
            debug!(symbol = %asset.symbol, error = %e, "Rejected indicator snapshot");
            e
        })
    }
}
