//! Support and resistance level ordering.

use crate::models::indicators::AssetData;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyLevels {
    /// Highest first, so the level closest under price leads.
    pub support: Vec<f64>,
    /// Lowest first.
    pub resistance: Vec<f64>,
}

impl KeyLevels {
    pub fn from_asset(asset: &AssetData) -> Self {
        Self::new(&asset.support_levels, &asset.resistance_levels)
    }

    /// Non-finite levels are dropped.
    pub fn new(support: &[f64], resistance: &[f64]) -> Self {
        let mut support: Vec<f64> = support.iter().copied().filter(|l| l.is_finite()).collect();
        let mut resistance: Vec<f64> = resistance.iter().copied().filter(|l| l.is_finite()).collect();
        support.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        resistance.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self {
            support,
            resistance,
        }
    }

    /// Highest support at or below `price`.
    pub fn nearest_support(&self, price: f64) -> Option<f64> {
        self.support.iter().copied().find(|level| *level <= price)
    }

    /// Lowest resistance at or above `price`.
    pub fn nearest_resistance(&self, price: f64) -> Option<f64> {
        self.resistance.iter().copied().find(|level| *level >= price)
    }
}

/// `"610 / 615"`; whole numbers lose their decimals.
pub fn render_levels(levels: &[f64]) -> String {
    levels
        .iter()
        .map(|level| format_price(*level))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{}", price)
    }
}
