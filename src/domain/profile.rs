//! Profile records following the OTel profiling data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single profiling sample as handed to a profile exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileRecord {
    /// Profile ID (32-char hex string)
    pub profile_id: String,

    /// Sample timestamp (nanoseconds since Unix epoch)
    pub time_unix_nano: u64,

    /// Observation window covered by the sample (nanoseconds)
    pub duration_nano: u64,

    /// Sample type (e.g., "cpu", "alloc_space")
    pub sample_type: String,

    /// Sampled value in `sample_unit`
    pub value: i64,

    /// Unit of the sampled value (e.g., "nanoseconds", "bytes")
    pub sample_unit: String,

    /// Call stack, leaf frame first
    pub frames: Vec<String>,

    /// Sample attributes
    pub attributes: HashMap<String, String>,
}
