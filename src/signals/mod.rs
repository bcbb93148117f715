//! Trend scoring and status classification.

pub mod decision;
pub mod engine;
pub mod scoring;

pub use decision::{decide_status, StatusRule, STATUS_RULES};
pub use engine::TrendClassifier;
pub use scoring::*;
