//! Unit tests for the trend classifier

use trendscope::config::{ClassifierConfig, SignalWeights, TrendThresholds};
use trendscope::indicators::InvalidIndicatorsError;
use trendscope::models::indicators::TechnicalIndicators;
use trendscope::models::trend::{BollingerPosition, RsiTier, TrendDetails, TrendStatus};
use trendscope::services::market_data::{qqq_fixture, spy_fixture};
use trendscope::signals::TrendClassifier;

use crate::fixtures::{all_bearish, all_bullish, weak_above_sma50};

fn score_of(indicators: &TechnicalIndicators) -> f64 {
    TrendClassifier::default()
        .classify(indicators)
        .expect("valid indicators")
        .score
}

#[test]
fn test_all_bullish_is_confirmed_uptrend() {
    let analysis = TrendClassifier::default().classify(&all_bullish()).unwrap();
    assert_eq!(analysis.score, 10.0);
    assert_eq!(analysis.status, TrendStatus::ConfirmedUptrend);
    assert_eq!(
        analysis.details,
        TrendDetails {
            sma50: true,
            sma20: true,
            volume: true,
            rsi: RsiTier::Bull,
            macd: true,
            bollinger: BollingerPosition::Above,
        }
    );
}

#[test]
fn test_qqq_fixture_is_unconfirmed_rebound() {
    let analysis = TrendClassifier::default()
        .classify_asset(&qqq_fixture())
        .unwrap();
    assert_eq!(analysis.score, 6.0);
    assert_eq!(analysis.status, TrendStatus::ReboundUnconfirmed);
    assert!(analysis.details.sma50);
    assert!(!analysis.details.sma20);
    assert!(!analysis.details.volume);
    assert_eq!(analysis.details.rsi, RsiTier::Bull);
    assert!(analysis.details.macd);
    assert_eq!(analysis.details.bollinger, BollingerPosition::Above);
}

#[test]
fn test_spy_fixture_gets_partial_rsi_credit() {
    let analysis = TrendClassifier::default()
        .classify_asset(&spy_fixture())
        .unwrap();
    assert_eq!(analysis.details.rsi, RsiTier::Neutral);
    assert_eq!(analysis.score, 6.5);
    assert_eq!(analysis.status, TrendStatus::ReboundUnconfirmed);
}

#[test]
fn test_all_bearish_is_fakeout() {
    let analysis = TrendClassifier::default().classify(&all_bearish()).unwrap();
    assert_eq!(analysis.score, 0.0);
    assert_eq!(analysis.status, TrendStatus::FakeoutBearish);
    assert_eq!(analysis.details.passed_count(), 0);
}

#[test]
fn test_low_score_holding_sma50_is_downtrend() {
    let analysis = TrendClassifier::default()
        .classify(&weak_above_sma50())
        .unwrap();
    assert_eq!(analysis.score, 2.5);
    assert_eq!(analysis.status, TrendStatus::ConfirmedDowntrend);
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = TrendClassifier::default();
    let input = qqq_fixture().indicators;
    assert_eq!(classifier.classify(&input), classifier.classify(&input));
}

#[test]
fn test_score_stays_within_bounds() {
    let classifier = TrendClassifier::default();
    for close in [50.0, 99.0, 100.0, 101.0, 150.0] {
        for rsi in [0.0, 44.999, 45.0, 53.0, 100.0, 140.0] {
            for volume in [0, 99, 110, 1_000] {
                let mut input = all_bullish();
                input.close = close;
                input.sma50 = 100.0;
                input.sma20 = 100.0;
                input.bollinger.middle = 100.0;
                input.rsi = rsi;
                input.volume = volume;
                let score = classifier.classify(&input).unwrap().score;
                assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
            }
        }
    }
}

#[test]
fn test_crossing_each_level_adds_its_weight() {
    let mut input = all_bearish();
    input.sma50 = 100.0;
    input.sma20 = 110.0;
    input.bollinger.middle = 120.0;

    input.close = 95.0;
    let below_all = score_of(&input);
    input.close = 105.0;
    let above_sma50 = score_of(&input);
    input.close = 115.0;
    let above_sma20 = score_of(&input);
    input.close = 125.0;
    let above_middle = score_of(&input);

    assert_eq!(above_sma50 - below_all, 2.0);
    assert_eq!(above_sma20 - above_sma50, 2.0);
    assert_eq!(above_middle - above_sma20, 1.0);
}

#[test]
fn test_rsi_boundaries_through_classifier() {
    let mut input = all_bearish();
    input.rsi = 53.0;
    assert_eq!(score_of(&input), 2.0);
    input.rsi = 52.999;
    assert_eq!(score_of(&input), 0.5);
    input.rsi = 45.0;
    assert_eq!(score_of(&input), 0.5);
    input.rsi = 44.999;
    assert_eq!(score_of(&input), 0.0);
}

#[test]
fn test_volume_boundary_through_classifier() {
    let mut input = all_bearish();
    input.volume = 110;
    input.avg_volume_20 = 100;
    let analysis = TrendClassifier::default().classify(&input).unwrap();
    assert!(analysis.details.volume);
    assert_eq!(analysis.score, 2.0);
}

#[test]
fn test_invalid_snapshot_is_rejected() {
    let classifier = TrendClassifier::default();

    let mut input = all_bullish();
    input.close = f64::NAN;
    assert!(matches!(
        classifier.classify(&input),
        Err(InvalidIndicatorsError::NonFinite { field: "close", .. })
    ));

    let mut input = all_bullish();
    input.avg_volume_20 = 0;
    assert_eq!(
        classifier.classify(&input),
        Err(InvalidIndicatorsError::ZeroAverageVolume)
    );
}

#[test]
fn test_custom_weights_are_clamped() {
    let weights = SignalWeights {
        sma50: 4.0,
        sma20: 4.0,
        volume: 4.0,
        rsi_bull: 4.0,
        rsi_neutral: 1.0,
        macd: 2.0,
        bollinger: 2.0,
    };
    let config = ClassifierConfig::new(weights, TrendThresholds::default()).unwrap();
    let analysis = TrendClassifier::new(config).classify(&all_bullish()).unwrap();
    assert_eq!(analysis.score, 10.0);
    assert_eq!(analysis.status, TrendStatus::ConfirmedUptrend);
}

fn classify_with_sma_weights(sma50: f64, sma20: f64) -> (f64, TrendStatus) {
    let weights = SignalWeights {
        sma50,
        sma20,
        volume: 0.0,
        rsi_bull: 0.0,
        rsi_neutral: 0.0,
        macd: 0.0,
        bollinger: 0.0,
    };
    let config = ClassifierConfig::new(weights, TrendThresholds::default()).unwrap();
    let analysis = TrendClassifier::new(config).classify(&all_bullish()).unwrap();
    (analysis.score, analysis.status)
}

#[test]
fn test_status_agrees_with_reported_score() {
    // 8.4999 reports as 8.5, which is the uptrend band.
    assert_eq!(
        classify_with_sma_weights(8.4999, 0.0),
        (8.5, TrendStatus::ConfirmedUptrend)
    );
    // 2.24 + 2.24 = 4.48 reports as 4.5, which is the rebound band.
    assert_eq!(
        classify_with_sma_weights(2.24, 2.24),
        (4.5, TrendStatus::ReboundUnconfirmed)
    );
    // 4.44 reports as 4.4 and stays below it.
    assert_eq!(
        classify_with_sma_weights(2.22, 2.22),
        (4.4, TrendStatus::ConfirmedDowntrend)
    );
}

#[test]
fn test_analysis_serializes_to_wire_schema() {
    let analysis = TrendClassifier::default().classify(&all_bullish()).unwrap();
    let value = serde_json::to_value(analysis).unwrap();
    assert_eq!(value["status"], "CONFIRMED_UPTREND");
    assert_eq!(value["score"], 10.0);
    assert_eq!(value["details"]["rsi"], "BULL");
    assert_eq!(value["details"]["bollinger"], "ABOVE");
    assert_eq!(value["details"]["volume"], true);
}
