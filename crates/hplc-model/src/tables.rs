//! Consolidated cross-file tables handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::records::{ChromatogramPoint, PeakRecord};

/// One row of the consolidated peak table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakRow {
    pub sample_id: String,
    pub sample_name: String,
    /// User-facing name. Defaults to `sample_name`; a rename pass sets it to
    /// the chosen name, or to `None` when the sample had no rename entry.
    pub display_name: Option<String>,
    pub peak_number: i64,
    pub retention_time: f64,
    pub area: f64,
    /// Derived via the calibration model; `area` itself is never mutated.
    pub concentration: Option<f64>,
}

impl From<PeakRecord> for PeakRow {
    fn from(record: PeakRecord) -> Self {
        Self {
            display_name: Some(record.sample_name.clone()),
            sample_id: record.sample_id,
            sample_name: record.sample_name,
            peak_number: record.peak_number,
            retention_time: record.retention_time,
            area: record.area,
            concentration: None,
        }
    }
}

/// One row of the consolidated chromatogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromatogramRow {
    pub sample_id: String,
    pub sample_name: String,
    pub display_name: Option<String>,
    pub retention_time_min: f64,
    pub intensity: f64,
}

impl From<ChromatogramPoint> for ChromatogramRow {
    fn from(point: ChromatogramPoint) -> Self {
        Self {
            display_name: Some(point.sample_name.clone()),
            sample_id: point.sample_id,
            sample_name: point.sample_name,
            retention_time_min: point.retention_time_min,
            intensity: point.intensity,
        }
    }
}

/// Deduplicated concatenation of every uploaded report's peak table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedPeakTable {
    pub rows: Vec<PeakRow>,
}

impl ConsolidatedPeakTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Deduplicated concatenation of every uploaded report's intensity trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedChromatogram {
    pub rows: Vec<ChromatogramRow>,
}

impl ConsolidatedChromatogram {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
