//! Error types for report ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or parsing a report file.
///
/// Row-level parse failures are not represented here: a malformed data row is
/// dropped and counted, never fatal to its file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the report file.
    #[error("failed to read report {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required metadata field was absent after a full scan.
    #[error("malformed report {file}: missing {missing}")]
    MalformedReport { file: String, missing: &'static str },

    /// The `# of Peaks` field did not hold an integer.
    #[error("malformed report {file}: invalid peak count '{value}'")]
    InvalidPeakCount { file: String, value: String },

    /// A required column header was absent from a table's header row.
    #[error("malformed report {file}: missing column '{column}'")]
    MissingColumn { file: String, column: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
