use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A calibration line with a zero (or non-finite) slope cannot be
    /// inverted to derive concentrations.
    #[error("calibration slope must be a non-zero finite number, got {slope}")]
    InvalidSlope { slope: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
