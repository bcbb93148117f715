use crate::display::labels::{
    action_advice, banner_action, leverage_pair, status_label, status_tone, ActionAdvice,
    StatusTone,
};
use crate::display::levels::KeyLevels;
use crate::models::indicators::{AssetData, TechnicalIndicators};
use crate::models::trend::TrendAnalysis;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the dashboard shows for one instrument.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub symbol: String,
    pub name: String,
    pub indicators: TechnicalIndicators,
    pub analysis: TrendAnalysis,
    pub label: &'static str,
    pub tone: StatusTone,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<ActionAdvice>,
    pub levels: KeyLevels,
    pub generated_at: DateTime<Utc>,
}

impl TrendReport {
    pub fn new(asset: AssetData, analysis: TrendAnalysis) -> Self {
        let status = analysis.status;
        let advice = leverage_pair(&asset.symbol)
            .map(|(long, inverse)| action_advice(status, &asset.symbol, long, inverse));
        let levels = KeyLevels::from_asset(&asset);

        Self {
            symbol: asset.symbol,
            name: asset.name,
            indicators: asset.indicators,
            analysis,
            label: status_label(status),
            tone: status_tone(status),
            action: banner_action(status),
            advice,
            levels,
            generated_at: Utc::now(),
        }
    }
}
