//! Error types for output generation.

use thiserror::Error;

/// Errors that can occur while writing download artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("png encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Nothing to draw: a chromatogram trace needs at least one point.
    #[error("cannot render an empty chromatogram trace")]
    EmptyTrace,

    #[error("trace axes differ in length: {times} times vs {intensities} intensities")]
    TraceLengthMismatch { times: usize, intensities: usize },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
