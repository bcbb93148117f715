//! Status-keyed copy and styling.

use crate::models::trend::{BollingerPosition, RsiTier, TrendStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Emerald,
    Yellow,
    Orange,
    Red,
}

impl StatusTone {
    pub fn text_class(&self) -> &'static str {
        match self {
            StatusTone::Emerald => "text-emerald-400",
            StatusTone::Yellow => "text-yellow-400",
            StatusTone::Orange => "text-orange-400",
            StatusTone::Red => "text-red-500",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            StatusTone::Emerald => "bg-emerald-500/10 border-emerald-500/50",
            StatusTone::Yellow => "bg-yellow-500/10 border-yellow-500/50",
            StatusTone::Orange => "bg-orange-500/10 border-orange-500/50",
            StatusTone::Red => "bg-red-900/20 border-red-500/50",
        }
    }

    /// ANSI foreground color code for terminal output.
    pub fn ansi_code(&self) -> u8 {
        match self {
            StatusTone::Emerald => 32,
            StatusTone::Yellow => 33,
            StatusTone::Orange => 35,
            StatusTone::Red => 31,
        }
    }
}

pub fn status_label(status: TrendStatus) -> &'static str {
    match status {
        TrendStatus::ConfirmedUptrend => "CONFIRMED UPTREND",
        TrendStatus::ReboundUnconfirmed => "REBOUND (UNCONFIRMED)",
        TrendStatus::FakeoutBearish => "FAKEOUT / BEARISH",
        TrendStatus::ConfirmedDowntrend => "CONFIRMED DOWNTREND",
    }
}

pub fn status_tone(status: TrendStatus) -> StatusTone {
    match status {
        TrendStatus::ConfirmedUptrend => StatusTone::Emerald,
        TrendStatus::ReboundUnconfirmed => StatusTone::Yellow,
        TrendStatus::FakeoutBearish => StatusTone::Orange,
        TrendStatus::ConfirmedDowntrend => StatusTone::Red,
    }
}

/// One-line strategy shown under the status banner.
pub fn banner_action(status: TrendStatus) -> &'static str {
    match status {
        TrendStatus::ConfirmedUptrend => "Leverage Longs (TQQQ/UPRO) Approved",
        TrendStatus::ReboundUnconfirmed => "Spot Only. Caution with Leverage.",
        TrendStatus::FakeoutBearish => "Stay Cash or Light Short (SQQQ).",
        TrendStatus::ConfirmedDowntrend => "Shorts (SQQQ/SPXU) Favored.",
    }
}

/// Action-plan card content for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionAdvice {
    pub badge: &'static str,
    pub headline: String,
    pub note: &'static str,
}

pub fn action_advice(
    status: TrendStatus,
    symbol: &str,
    leverage_ticker: &str,
    inverse_ticker: &str,
) -> ActionAdvice {
    match status {
        TrendStatus::ConfirmedUptrend => ActionAdvice {
            badge: "AGGRESSIVE",
            headline: format!(
                "Conditions met. {} (Leverage Long) is actionable.",
                leverage_ticker
            ),
            note: "Stop loss suggested at previous day low or SMA20 breach.",
        },
        TrendStatus::ReboundUnconfirmed => ActionAdvice {
            badge: "CAUTION",
            headline: format!("Use Spot ({}) or very light {}.", symbol, leverage_ticker),
            note: "Missing volume or SMA validation. High risk of whip-saw.",
        },
        TrendStatus::FakeoutBearish => ActionAdvice {
            badge: "DEFENSIVE",
            headline: format!("Cash is king. Consider light {}.", inverse_ticker),
            note: "Failed to hold key moving averages or RSI is weak.",
        },
        TrendStatus::ConfirmedDowntrend => ActionAdvice {
            badge: "SHORT",
            headline: format!("Trend is down. {} is actionable.", inverse_ticker),
            note: "RSI oversold bounces possible, but primary trend is down.",
        },
    }
}

/// Leveraged long and inverse tickers paired with an underlying.
pub fn leverage_pair(symbol: &str) -> Option<(&'static str, &'static str)> {
    match symbol.to_ascii_uppercase().as_str() {
        "QQQ" => Some(("TQQQ", "SQQQ")),
        "SPY" => Some(("UPRO", "SPXU")),
        _ => None,
    }
}

pub fn rsi_tone(tier: RsiTier) -> StatusTone {
    match tier {
        RsiTier::Bull => StatusTone::Emerald,
        RsiTier::Neutral => StatusTone::Yellow,
        RsiTier::Bear => StatusTone::Red,
    }
}

pub fn bollinger_label(position: BollingerPosition) -> &'static str {
    match position {
        BollingerPosition::Above => "Above middle band",
        BollingerPosition::At => "At middle band",
        BollingerPosition::Below => "Below middle band",
    }
}
