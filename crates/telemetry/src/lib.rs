//! Logging and metrics for catalog search
//!
//! This crate provides:
//! - Structured logging with tracing (compact or JSON, optional rolling file)
//! - A process-wide metrics registry (counters, gauges, latency histograms)
//! - Timers that feed the registry

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};
use uuid::Uuid;

/// Global metrics registry
static METRICS: Lazy<MetricsRegistry> = Lazy::new(MetricsRegistry::new);

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// File name prefix for rotated log files
const LOG_FILE_PREFIX: &str = "catalog-search.log";

/// Keeps the background log writer alive; drop it on shutdown to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the telemetry system with defaults
pub fn init() -> anyhow::Result<TelemetryGuard> {
    init_with_config(&TelemetryConfig::default())
}

/// Initialize with custom configuration
pub fn init_with_config(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", config.log_level, e))?;

    let console = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(config.show_target)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(config.show_target)
            .with_thread_ids(config.show_thread_ids)
            .boxed()
    };

    let (file, file_guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::info!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        _file_guard: file_guard,
    })
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json: bool,
    pub log_dir: Option<String>,
    pub show_target: bool,
    pub show_thread_ids: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            log_dir: None,
            show_target: false,
            show_thread_ids: false,
        }
    }
}

/// Metrics registry for collecting and exporting metrics
pub struct MetricsRegistry {
    counters: RwLock<HashMap<String, AtomicU64>>,
    gauges: RwLock<HashMap<String, AtomicU64>>,
    histograms: RwLock<HashMap<String, Histogram>>,
    started_at: DateTime<Utc>,
    start_time: Instant,
}

impl MetricsRegistry {
    fn new() -> Self {
        Self {
            counters: RwLock::new(HashMap::new()),
            gauges: RwLock::new(HashMap::new()),
            histograms: RwLock::new(HashMap::new()),
            started_at: Utc::now(),
            start_time: Instant::now(),
        }
    }

    /// Increment a counter
    pub fn increment(&self, name: &str) {
        self.increment_by(name, 1);
    }

    /// Increment a counter by a specific amount
    pub fn increment_by(&self, name: &str, value: u64) {
        let counters = self.counters.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(counter) = counters.get(name) {
            counter.fetch_add(value, Ordering::Relaxed);
        } else {
            drop(counters);
            let mut counters = self.counters.write().unwrap_or_else(PoisonError::into_inner);
            counters
                .entry(name.to_string())
                .or_insert_with(|| AtomicU64::new(0))
                .fetch_add(value, Ordering::Relaxed);
        }
    }

    /// Current value of a counter (0 if never incremented)
    pub fn counter(&self, name: &str) -> u64 {
        self.counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Set a gauge value
    pub fn gauge(&self, name: &str, value: u64) {
        let mut gauges = self.gauges.write().unwrap_or_else(PoisonError::into_inner);
        gauges
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .store(value, Ordering::Relaxed);
    }

    /// Record a histogram value
    ///
    /// Storage per histogram is fixed; only the write that creates a new
    /// name takes the map's write lock.
    pub fn histogram(&self, name: &str, value: f64) {
        let histograms = self.histograms.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(histogram) = histograms.get(name) {
            histogram.record(value);
        } else {
            drop(histograms);
            let mut histograms = self.histograms.write().unwrap_or_else(PoisonError::into_inner);
            histograms
                .entry(name.to_string())
                .or_insert_with(Histogram::new)
                .record(value);
        }
    }

    /// Summary of a histogram (`None` if never recorded)
    pub fn histogram_stats(&self, name: &str) -> Option<HistogramStats> {
        self.histograms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Histogram::stats)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Export metrics as JSON
    pub fn export_json(&self) -> serde_json::Value {
        let counters = self.counters.read().unwrap_or_else(PoisonError::into_inner);
        let gauges = self.gauges.read().unwrap_or_else(PoisonError::into_inner);
        let histograms = self.histograms.read().unwrap_or_else(PoisonError::into_inner);

        let counter_values: HashMap<&str, u64> = counters
            .iter()
            .map(|(k, v)| (k.as_str(), v.load(Ordering::Relaxed)))
            .collect();

        let gauge_values: HashMap<&str, u64> = gauges
            .iter()
            .map(|(k, v)| (k.as_str(), v.load(Ordering::Relaxed)))
            .collect();

        let histogram_stats: HashMap<&str, HistogramStats> = histograms
            .iter()
            .map(|(k, v)| (k.as_str(), v.stats()))
            .collect();

        serde_json::json!({
            "session_id": session_id(),
            "started_at": self.started_at.to_rfc3339(),
            "uptime_secs": self.uptime_secs(),
            "counters": counter_values,
            "gauges": gauge_values,
            "histograms": histogram_stats,
        })
    }
}

/// Upper bounds (milliseconds) of the latency buckets; one overflow bucket follows.
const BUCKET_BOUNDS_MS: [f64; 14] = [
    0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
];

/// Fixed-size latency histogram.
///
/// Keeps count, sum, min, max and bucket counts in atomics, so recording
/// never allocates and never blocks other recorders.
struct Histogram {
    count: AtomicU64,
    sum_micros: AtomicU64,
    min_micros: AtomicU64,
    max_micros: AtomicU64,
    buckets: [AtomicU64; BUCKET_BOUNDS_MS.len() + 1],
}

impl Histogram {
    fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_micros: AtomicU64::new(0),
            min_micros: AtomicU64::new(u64::MAX),
            max_micros: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    fn record(&self, value_ms: f64) {
        let value_ms = if value_ms.is_finite() { value_ms.max(0.0) } else { 0.0 };
        let micros = (value_ms * 1000.0).round() as u64;
        let bucket = BUCKET_BOUNDS_MS
            .iter()
            .position(|bound| value_ms <= *bound)
            .unwrap_or(BUCKET_BOUNDS_MS.len());

        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros.fetch_add(micros, Ordering::Relaxed);
        self.min_micros.fetch_min(micros, Ordering::Relaxed);
        self.max_micros.fetch_max(micros, Ordering::Relaxed);
        self.buckets[bucket].fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self) -> HistogramStats {
        let count = self.count.load(Ordering::Relaxed);
        if count == 0 {
            return HistogramStats::default();
        }

        let to_ms = |micros: u64| micros as f64 / 1000.0;
        let min = to_ms(self.min_micros.load(Ordering::Relaxed));
        let max = to_ms(self.max_micros.load(Ordering::Relaxed));
        let counts: Vec<u64> = self.buckets.iter().map(|b| b.load(Ordering::Relaxed)).collect();

        // Bucket upper bound, clamped into the observed range.
        let quantile = |q: f64| {
            let rank = ((q * count as f64).ceil() as u64).max(1);
            let mut seen: u64 = 0;
            for (i, n) in counts.iter().enumerate() {
                seen += *n;
                if seen >= rank {
                    return BUCKET_BOUNDS_MS.get(i).copied().unwrap_or(max).max(min).min(max);
                }
            }
            max
        };

        HistogramStats {
            count,
            min,
            max,
            mean: to_ms(self.sum_micros.load(Ordering::Relaxed)) / count as f64,
            p50: quantile(0.50),
            p95: quantile(0.95),
            p99: quantile(0.99),
        }
    }
}

/// Histogram statistics; percentiles are bucket estimates
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistogramStats {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Get the global metrics registry
pub fn metrics() -> &'static MetricsRegistry {
    &METRICS
}

/// Timer for measuring operation duration
///
/// Records into the named histogram (milliseconds) exactly once, either on
/// [`Timer::stop`] or when dropped.
pub struct Timer {
    name: &'static str,
    start: Instant,
    recorded: bool,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            recorded: false,
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(mut self) -> Duration {
        self.record()
    }

    fn record(&mut self) -> Duration {
        let duration = self.start.elapsed();
        if !self.recorded {
            self.recorded = true;
            metrics().histogram(self.name, duration.as_secs_f64() * 1000.0);
            tracing::debug!(
                metric = self.name,
                duration_ms = duration.as_millis(),
                "Timer completed"
            );
        }
        duration
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.record();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counter() {
        let registry = MetricsRegistry::new();
        registry.increment("search.requests");
        registry.increment("search.requests");
        registry.increment_by("search.requests", 3);

        assert_eq!(registry.counter("search.requests"), 5);
        assert_eq!(registry.counter("search.never"), 0);
    }

    #[test]
    fn test_metrics_gauge() {
        let registry = MetricsRegistry::new();
        registry.gauge("catalog.items", 42);
        registry.gauge("catalog.items", 100);

        let gauges = registry.gauges.read().unwrap();
        assert_eq!(gauges.get("catalog.items").unwrap().load(Ordering::Relaxed), 100);
    }

    #[test]
    fn test_histogram_stats() {
        let registry = MetricsRegistry::new();
        for v in 1..=10 {
            registry.histogram("search.latency_ms", f64::from(v));
        }

        let stats = registry.histogram_stats("search.latency_ms").unwrap();
        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 5.5);
        assert_eq!(stats.p50, 5.0);
        assert_eq!(stats.p99, 10.0);
        assert!(registry.histogram_stats("search.never").is_none());
    }

    #[test]
    fn test_histogram_storage_is_bounded() {
        let registry = MetricsRegistry::new();
        for i in 0..20_000 {
            registry.histogram("search.latency_ms", f64::from(i % 700));
        }

        let stats = registry.histogram_stats("search.latency_ms").unwrap();
        assert_eq!(stats.count, 20_000);
        assert_eq!(stats.max, 699.0);

        let histograms = registry.histograms.read().unwrap();
        assert_eq!(histograms.len(), 1);
        let bucketed: u64 = histograms["search.latency_ms"]
            .buckets
            .iter()
            .map(|b| b.load(Ordering::Relaxed))
            .sum();
        assert_eq!(bucketed, 20_000);
    }

    #[test]
    fn test_histogram_ignores_bad_samples() {
        let registry = MetricsRegistry::new();
        registry.histogram("suggest.latency_ms", f64::NAN);
        registry.histogram("suggest.latency_ms", -3.0);

        let stats = registry.histogram_stats("suggest.latency_ms").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.max, 0.0);
    }

    #[test]
    fn test_export_json_shape() {
        let registry = MetricsRegistry::new();
        registry.increment("suggest.requests");
        registry.histogram("suggest.latency_ms", 3.5);

        let json = registry.export_json();
        assert_eq!(json["counters"]["suggest.requests"], 1);
        assert_eq!(json["histograms"]["suggest.latency_ms"]["count"], 1);
        assert!(json["started_at"].is_string());
    }

    #[test]
    fn test_timer_records_once() {
        let timer = Timer::start("test.timer_records_once");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);

        let stats = metrics().histogram_stats("test.timer_records_once").unwrap();
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(!id.is_empty());
        assert!(Uuid::parse_str(id).is_ok());
    }
}
