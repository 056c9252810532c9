//! Per-file outcome types surfaced after an analysis pass.

use serde::{Deserialize, Serialize};

/// Row counts for one successfully ingested report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub file: String,
    pub peaks: usize,
    pub chromatogram_points: usize,
    /// Data rows skipped because a required cell failed numeric parsing.
    pub dropped_rows: usize,
}

/// A rejected report: the file contributed zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub file: String,
    pub message: String,
}

/// Outcome of compiling all uploaded reports into the consolidated tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub files: Vec<FileResult>,
    pub errors: Vec<FileError>,
    pub peak_rows: usize,
    pub chromatogram_rows: usize,
}

impl AnalysisSummary {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Total rows dropped across all files.
    pub fn dropped_rows(&self) -> usize {
        self.files.iter().map(|f| f.dropped_rows).sum()
    }
}
