//! Prometheus metrics for the API server.

use crate::models::trend::TrendStatus;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub trend_classifications_total: IntCounterVec,
    pub invalid_indicators_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let trend_classifications_total = IntCounterVec::new(
            Opts::new(
                "trend_classifications_total",
                "Trend classifications by resulting status",
            ),
            &["status"],
        )?;
        let invalid_indicators_total = IntCounter::new(
            "invalid_indicators_total",
            "Indicator snapshots rejected before scoring",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(trend_classifications_total.clone()))?;
        registry.register(Box::new(invalid_indicators_total.clone()))?;

        // Expose every status series from the start, even at zero.
        for status in TrendStatus::all() {
            trend_classifications_total.with_label_values(&[status.as_str()]);
        }

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            trend_classifications_total,
            invalid_indicators_total,
        })
    }

    pub fn record_classification(&self, status: TrendStatus) {
        self.trend_classifications_total
            .with_label_values(&[status.as_str()])
            .inc();
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
