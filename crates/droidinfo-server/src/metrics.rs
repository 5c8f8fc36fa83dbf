//! Prometheus metrics for the snapshot endpoint

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Request counters and snapshot build timings
pub struct RequestMetrics {
    registry: Registry,
    /// Counter: requests by (route, status code)
    pub requests_total: IntCounterVec,
    /// Histogram: time spent building a response payload, in seconds
    pub build_duration_seconds: HistogramVec,
}

impl RequestMetrics {
    /// Creates a new `RequestMetrics` with all metrics registered.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new_custom(Some("droidinfo".to_string()), None)?;

        let requests_total = IntCounterVec::new(
            Opts::new("requests_total", "Total HTTP requests"),
            &["route", "status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let build_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "build_duration_seconds",
                "Time spent building a response payload in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.25, 1.0]),
            &["route"],
        )?;
        registry.register(Box::new(build_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            build_duration_seconds,
        })
    }

    /// Record one answered request.
    pub fn record_request(&self, route: &str, status: u16) {
        self.requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Observe how long a payload took to build.
    pub fn observe_build_duration(&self, route: &str, duration_secs: f64) {
        self.build_duration_seconds
            .with_label_values(&[route])
            .observe(duration_secs);
    }

    /// Encode all metrics in Prometheus text exposition format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
