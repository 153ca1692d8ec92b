//! Metric records following the OTel metrics data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single metric data point as handed to a metric exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricRecord {
    /// Metric name (e.g., "http.server.request.duration")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Unit of measure (UCUM)
    pub unit: String,

    /// The recorded data point
    pub value: MetricValue,

    /// Timestamp (nanoseconds since Unix epoch)
    pub time_unix_nano: u64,

    /// Data point attributes
    pub attributes: HashMap<String, String>,
}

/// Metric data point, by aggregation shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// Last-value aggregation
    Gauge(f64),

    /// Running total; `monotonic` distinguishes counters from up-down counters
    Sum { value: f64, monotonic: bool },

    /// Histogram summary without buckets
    Histogram { count: u64, sum: f64 },
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Gauge(0.0)
    }
}
