//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::AppConfig;
use crate::core::error::ApiError;
use crate::display::{MarketSentiment, TrendReport};
use crate::metrics::Metrics;
use crate::models::indicators::{AssetData, TechnicalIndicators};
use crate::models::trend::TrendAnalysis;
use crate::services::{IndicatorProvider, MockIndicatorProvider};
use crate::signals::TrendClassifier;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub classifier: Arc<TrendClassifier>,
    pub provider: Arc<dyn IndicatorProvider>,
}

impl AppState {
    pub fn new(
        metrics: Arc<Metrics>,
        classifier: TrendClassifier,
        provider: Arc<dyn IndicatorProvider>,
    ) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            classifier: Arc::new(classifier),
            provider,
        }
    }

    /// Classify and count the outcome; rejected snapshots are counted too.
    fn classify(&self, indicators: &TechnicalIndicators) -> Result<TrendAnalysis, ApiError> {
        match self.classifier.classify(indicators) {
            Ok(analysis) => {
                self.metrics.record_classification(analysis.status);
                Ok(analysis)
            }
            Err(e) => {
                self.metrics.invalid_indicators_total.inc();
                warn!(error = %e, "Rejected indicator snapshot");
                Err(e.into())
            }
        }
    }

    fn report(&self, asset: AssetData) -> Result<TrendReport, ApiError> {
        let analysis = self.classify(&asset.indicators)?;
        Ok(TrendReport::new(asset, analysis))
    }
}

/// Liveness only; the classifier has no dependencies that can degrade.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "service": "trendscope"
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List the symbols the indicator provider can serve
async fn list_assets(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "symbols": state.provider.symbols() }))
}

/// Market-wide Fear & Greed reading
async fn market_sentiment(State(state): State<AppState>) -> Json<MarketSentiment> {
    Json(MarketSentiment::from_index(state.provider.fear_greed_index()))
}

/// Trend report for every available asset
async fn trend_all(State(state): State<AppState>) -> Result<Json<Vec<TrendReport>>, ApiError> {
    let mut reports = Vec::new();
    for symbol in state.provider.symbols() {
        let asset = state.provider.get_asset(&symbol)?;
        reports.push(state.report(asset)?);
    }
    Ok(Json(reports))
}

/// Trend report for one asset
async fn trend_for_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<TrendReport>, ApiError> {
    let asset = state.provider.get_asset(&symbol)?;
    Ok(Json(state.report(asset)?))
}

/// Classify a caller-supplied indicator snapshot
async fn classify_indicators(
    State(state): State<AppState>,
    payload: Result<Json<TechnicalIndicators>, JsonRejection>,
) -> Result<Json<TrendAnalysis>, ApiError> {
    let Json(indicators) = payload.map_err(|rejection| {
        state.metrics.invalid_indicators_total.inc();
        warn!(error = %rejection.body_text(), "Rejected indicator payload");
        ApiError::from(rejection)
    })?;
    Ok(Json(state.classify(&indicators)?))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/assets", get(list_assets))
        .route("/api/market", get(market_sentiment))
        .route("/api/trend", get(trend_all))
        .route("/api/trend/classify", post(classify_indicators))
        .route("/api/trend/{symbol}", get(trend_for_symbol))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Resolves on ctrl-c so in-flight requests can drain.
pub async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
        return;
    }
    info!("Shutting down API server...");
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    serve_until(config, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then finish in-flight requests and return.
pub async fn serve_until<F>(config: AppConfig, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics = Arc::new(Metrics::new()?);
    let classifier = TrendClassifier::new(config.classifier.clone());
    let provider: Arc<dyn IndicatorProvider> = Arc::new(MockIndicatorProvider::new());

    let state = AppState::new(metrics, classifier, provider);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");

    Ok(())
}
