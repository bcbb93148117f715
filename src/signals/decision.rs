//! Status decision list.
//!
//! Rules are evaluated top to bottom and the first match wins. The low-score
//! band is split by a secondary bearish test that reads raw indicator fields
//! rather than the score.

use crate::config::TrendThresholds;
use crate::models::indicators::TechnicalIndicators;
use crate::models::trend::TrendStatus;

/// Inputs visible to every status rule.
pub struct StatusContext<'a> {
    pub score: f64,
    pub indicators: &'a TechnicalIndicators,
    pub thresholds: &'a TrendThresholds,
}

pub struct StatusRule {
    pub name: &'static str,
    pub status: TrendStatus,
    predicate: fn(&StatusContext) -> bool,
}

impl StatusRule {
    pub fn matches(&self, ctx: &StatusContext) -> bool {
        (self.predicate)(ctx)
    }
}

fn high_conviction(ctx: &StatusContext) -> bool {
    ctx.score >= ctx.thresholds.uptrend_score
}

fn partial_conviction(ctx: &StatusContext) -> bool {
    ctx.score >= ctx.thresholds.rebound_score
}

/// Below the long average, or weak volume together with weak momentum.
fn bearish_confirmation(ctx: &StatusContext) -> bool {
    let i = ctx.indicators;
    i.close < i.sma50 || (i.volume < i.avg_volume_20 && i.rsi < ctx.thresholds.rsi_bear)
}

fn residual(_: &StatusContext) -> bool {
    true
}

pub static STATUS_RULES: [StatusRule; 4] = [
    StatusRule {
        name: "high_conviction",
        status: TrendStatus::ConfirmedUptrend,
        predicate: high_conviction,
    },
    StatusRule {
        name: "partial_conviction",
        status: TrendStatus::ReboundUnconfirmed,
        predicate: partial_conviction,
    },
    StatusRule {
        name: "bearish_confirmation",
        status: TrendStatus::FakeoutBearish,
        predicate: bearish_confirmation,
    },
    StatusRule {
        name: "residual",
        status: TrendStatus::ConfirmedDowntrend,
        predicate: residual,
    },
];

/// First rule that matches, together with its status.
pub fn matching_rule(ctx: &StatusContext) -> &'static StatusRule {
    STATUS_RULES
        .iter()
        .find(|rule| rule.matches(ctx))
        .unwrap_or(&STATUS_RULES[STATUS_RULES.len() - 1])
}

pub fn decide_status(
    score: f64,
    indicators: &TechnicalIndicators,
    thresholds: &TrendThresholds,
) -> TrendStatus {
    let ctx = StatusContext {
        score,
        indicators,
        thresholds,
    };
    matching_rule(&ctx).status
}
