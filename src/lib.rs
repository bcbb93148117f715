//! Trend posture classification for index instruments.
//!
//! The classifier turns a snapshot of technical indicators into a conviction
//! score, a categorical trend status and the per-signal breakdown behind it.

pub mod config;
pub mod core;
pub mod display;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
