//! Trendscope API Server
//!
//! HTTP API serving trend reports for the configured indicator provider and
//! classification of caller-supplied indicator snapshots. Stateless; can be
//! horizontally scaled.

use dotenvy::dotenv;
use tracing::{error, info};
use trendscope::config::AppConfig;
use trendscope::core::http::start_server;
use trendscope::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    let port = config.port;

    info!("Starting Trendscope API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(
        uptrend = config.classifier.thresholds.uptrend_score,
        rebound = config.classifier.thresholds.rebound_score,
        max_score = config.classifier.weights.max_score(),
        "Classifier thresholds"
    );

    if let Err(e) = start_server(config).await {
        error!(error = %e, "HTTP server error");
        return Err(e);
    }

    Ok(())
}
