//! Rows extracted from the embedded report tables.

use serde::{Deserialize, Serialize};

/// One detected chromatographic peak, tagged with its source sample.
///
/// `peak_number` is unique within a sample but not across samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakRecord {
    pub sample_id: String,
    pub sample_name: String,
    pub peak_number: i64,
    /// Retention time in minutes.
    pub retention_time: f64,
    pub area: f64,
}

/// One point of the detector intensity trace for a sample.
///
/// Traces are time-ascending as exported by the instrument; a full trace has
/// large cardinality compared to the peak table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromatogramPoint {
    pub sample_id: String,
    pub sample_name: String,
    pub retention_time_min: f64,
    pub intensity: f64,
}
