//! Integration tests for the API Server


use serde_json::{json, Value};
use trendscope::config::AppConfig;
use trendscope::core::http::serve_until;
use trendscope::services::MockIndicatorProvider;

use test_utils::TestApiServer;

fn all_bullish_payload() -> Value {
    json!({
        "close": 610.0,
        "sma50": 600.0,
        "sma20": 605.0,
        "volume": 120,
        "avgVolume20": 100,
        "rsi": 60.0,
        "macd": {"line": 2.0, "signal": 1.0, "histogram": 1.0},
        "bollinger": {"upper": 615.0, "middle": 605.0, "lower": 595.0}
    })
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "trendscope");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
    assert!(body.contains("trend_classifications_total"));
    assert!(body.contains("invalid_indicators_total"));
}

#[tokio::test]
async fn assets_endpoint_lists_provider_symbols() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/assets").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbols"], json!(["QQQ", "SPY"]));
}

#[tokio::test]
async fn trend_report_for_qqq() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/trend/qqq").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "QQQ");
    assert_eq!(body["analysis"]["score"], 6.0);
    assert_eq!(body["analysis"]["status"], "REBOUND_UNCONFIRMED");
    assert_eq!(body["analysis"]["details"]["sma20"], false);
    assert_eq!(body["label"], "REBOUND (UNCONFIRMED)");
    assert_eq!(body["action"], "Spot Only. Caution with Leverage.");
    assert_eq!(body["advice"]["badge"], "CAUTION");
    assert_eq!(body["levels"]["support"], json!([602.0, 597.0]));
    assert!(body["generatedAt"].is_string());

    let counted = app
        .metrics
        .trend_classifications_total
        .with_label_values(&["REBOUND_UNCONFIRMED"])
        .get();
    assert_eq!(counted, 1);
}

#[tokio::test]
async fn trend_report_for_all_assets() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/trend").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let reports = body.as_array().expect("array of reports");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["symbol"], "SPY");
    assert_eq!(reports[1]["analysis"]["score"], 6.5);
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/trend/IWM").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["status"], 404);
    assert!(body["error"].as_str().unwrap().contains("IWM"));
}

#[tokio::test]
async fn classify_endpoint_scores_snapshot() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/trend/classify")
        .json(&all_bullish_payload())
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["score"], 10.0);
    assert_eq!(body["status"], "CONFIRMED_UPTREND");
    assert_eq!(
        body["details"],
        json!({
            "sma50": true,
            "sma20": true,
            "volume": true,
            "rsi": "BULL",
            "macd": true,
            "bollinger": "ABOVE"
        })
    );
}

#[tokio::test]
async fn classify_endpoint_rejects_invalid_snapshot() {
    let app = TestApiServer::new().await;
    let mut payload = all_bullish_payload();
    payload["avgVolume20"] = json!(0);

    let response = app
        .server
        .post("/api/trend/classify")
        .json(&payload)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["field"], "avgVolume20");
    assert_eq!(app.metrics.invalid_indicators_total.get(), 1);
}

#[tokio::test]
async fn classify_endpoint_rejects_negative_price() {
    let app = TestApiServer::new().await;
    let mut payload = all_bullish_payload();
    payload["sma20"] = json!(-5.0);

    let response = app
        .server
        .post("/api/trend/classify")
        .json(&payload)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["field"], "sma20");
}

#[tokio::test]
async fn classify_endpoint_rejects_payload_missing_a_field() {
    let app = TestApiServer::new().await;
    let mut payload = all_bullish_payload();
    payload.as_object_mut().unwrap().remove("rsi");

    let response = app
        .server
        .post("/api/trend/classify")
        .json(&payload)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("rsi"));
    assert_eq!(app.metrics.invalid_indicators_total.get(), 1);
}

#[tokio::test]
async fn classify_endpoint_rejects_fractional_volume() {
    let app = TestApiServer::new().await;
    let mut payload = all_bullish_payload();
    payload["volume"] = json!(56000000.5);

    let response = app
        .server
        .post("/api/trend/classify")
        .json(&payload)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["status"], 422);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn server_returns_once_shutdown_resolves() {
    let config = AppConfig {
        port: 0,
        ..AppConfig::default()
    };
    let result = serve_until(config, async {}).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn market_endpoint_without_index_is_unavailable() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/market").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["fearGreedIndex"], Value::Null);
    assert_eq!(body["band"], "UNAVAILABLE");
}

#[tokio::test]
async fn market_endpoint_reports_fear_greed_band() {
    let app =
        TestApiServer::with_provider(MockIndicatorProvider::new().with_fear_greed_index(16)).await;
    let response = app.server.get("/api/market").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["fearGreedIndex"], 16);
    assert_eq!(body["band"], "EXTREME_FEAR");
    assert_eq!(body["label"], "Extreme Fear");
}
