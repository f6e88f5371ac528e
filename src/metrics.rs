//! Prometheus metrics for the HTTP layer and the evaluation pipeline.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub provider_fetches_total: IntCounter,
    pub provider_fetch_failures_total: IntCounter,
    pub signal_evaluations_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounter::new(
            "dividash_http_requests_total",
            "Total HTTP requests served",
        )?;
        let http_requests_in_flight = IntGauge::new(
            "dividash_http_requests_in_flight",
            "HTTP requests currently being served",
        )?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "dividash_http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let provider_fetches_total = IntCounter::new(
            "dividash_provider_fetches_total",
            "Market data fetches attempted",
        )?;
        let provider_fetch_failures_total = IntCounter::new(
            "dividash_provider_fetch_failures_total",
            "Market data fetches that failed",
        )?;
        let signal_evaluations_total = IntCounter::new(
            "dividash_signal_evaluations_total",
            "Signal engine evaluations run",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(provider_fetches_total.clone()))?;
        registry.register(Box::new(provider_fetch_failures_total.clone()))?;
        registry.register(Box::new(signal_evaluations_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            provider_fetches_total,
            provider_fetch_failures_total,
            signal_evaluations_total,
        })
    }

    /// Export all registered metrics in Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
