//! Error types for data transforms.

use thiserror::Error;

use hplc_model::ModelError;

/// Errors from consolidation and calibration operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The calibration line cannot be used for concentration derivation.
    #[error("invalid calibration: {0}")]
    InvalidCalibration(#[from] ModelError),

    /// Fewer than two points, or all points at the same concentration.
    #[error(
        "insufficient calibration data: {points} point(s) with {distinct} distinct \
         concentration(s); at least 2 of each are required"
    )]
    InsufficientCalibrationData { points: usize, distinct: usize },

    /// A free-text concentration entry was not of the form `<number> <unit>`.
    #[error("could not parse concentration '{value}': expected '<number> <unit>', e.g. '5 ug/mL'")]
    ConcentrationParse { value: String },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
