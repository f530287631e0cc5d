//! Prometheus metrics for the maleda API and feed
//!
//! This module provides metrics tracking for:
//! - API: request counts by endpoint and status, request latency
//! - Catalog: number of loaded articles
//! - Feed: pages appended by paginators
//!
//! # Usage
//!
//! Call `init_metrics()` at application startup to register all metrics.
//! If initialization fails, metrics operations become no-ops.

use prometheus::{
    register_counter, register_counter_vec, register_gauge, register_histogram_vec, Counter,
    CounterVec, Encoder, Gauge, HistogramVec, TextEncoder,
};
use std::sync::OnceLock;

// ============================================================================
// Metrics Storage
// ============================================================================

/// Container for all service metrics
struct ServiceMetrics {
    api_requests: CounterVec,
    api_duration: HistogramVec,
    catalog_articles: Gauge,
    pages_loaded: Counter,
}

impl ServiceMetrics {
    fn register() -> Result<Self, prometheus::Error> {
        Ok(Self {
            api_requests: register_counter_vec!(
                "maleda_api_requests_total",
                "Total API requests by endpoint and status",
                &["endpoint", "status"]
            )?,
            api_duration: register_histogram_vec!(
                "maleda_api_request_duration_seconds",
                "API request duration in seconds",
                &["endpoint"],
                vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
            )?,
            catalog_articles: register_gauge!(
                "maleda_catalog_articles",
                "Number of articles in the loaded catalog"
            )?,
            pages_loaded: register_counter!(
                "maleda_feed_pages_loaded_total",
                "Total feed pages appended by paginators"
            )?,
        })
    }
}

/// Registered metrics, or `None` if registration failed
static SERVICE_METRICS: OnceLock<Option<ServiceMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static ServiceMetrics> {
    SERVICE_METRICS.get().and_then(Option::as_ref)
}

// ============================================================================
// Initialization
// ============================================================================

/// Initialize all Prometheus metrics
///
/// Safe to call more than once; registration runs a single time.
///
/// # Example
///
/// ```ignore
/// if let Err(e) = maleda::metrics::init_metrics() {
///     eprintln!("Warning: Metrics initialization failed: {}", e);
///     // Application can continue without metrics
/// }
/// ```
pub fn init_metrics() -> Result<(), Box<dyn std::error::Error>> {
    let slot = SERVICE_METRICS.get_or_init(|| match ServiceMetrics::register() {
        Ok(m) => {
            tracing::info!("Prometheus metrics initialized successfully");
            Some(m)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prometheus metrics registration failed");
            None
        }
    });

    if slot.is_some() {
        Ok(())
    } else {
        Err("Prometheus metrics registration failed".into())
    }
}

/// Check if metrics have been initialized
pub fn metrics_initialized() -> bool {
    metrics().is_some()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record API request
pub fn record_api_request(endpoint: &str, status: u16, duration_secs: f64) {
    let Some(m) = metrics() else {
        return;
    };

    let status_str = status.to_string();
    m.api_requests
        .with_label_values(&[endpoint, &status_str])
        .inc();
    m.api_duration
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

/// Record the size of the loaded catalog
pub fn set_catalog_size(articles: usize) {
    if let Some(m) = metrics() {
        m.catalog_articles.set(articles as f64);
    }
}

/// Record one feed page appended by a paginator
pub fn record_page_loaded() {
    if let Some(m) = metrics() {
        m.pages_loaded.inc();
    }
}

// ============================================================================
// Tests
// ============================================================================
