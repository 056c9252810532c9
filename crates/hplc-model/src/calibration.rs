//! The linear standard-curve model.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A fitted or manually supplied standard curve:
/// `area = slope * concentration + intercept`.
///
/// Immutable once constructed; construction rejects slopes that would make
/// the inverse transform divide by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationModel {
    slope: f64,
    intercept: f64,
    units: String,
}

impl CalibrationModel {
    pub fn new(slope: f64, intercept: f64, units: impl Into<String>) -> Result<Self> {
        if slope == 0.0 || !slope.is_finite() {
            return Err(ModelError::InvalidSlope { slope });
        }
        Ok(Self {
            slope,
            intercept,
            units: units.into(),
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Concentration units, e.g. `ug/mL`.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// The expected peak area for a known concentration.
    pub fn predict(&self, concentration: f64) -> f64 {
        self.slope * concentration + self.intercept
    }

    /// The inverse transform: concentration for a measured peak area.
    pub fn concentration_for(&self, area: f64) -> f64 {
        (area - self.intercept) / self.slope
    }
}
