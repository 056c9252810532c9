//! Standard-curve fitting and concentration derivation.

use tracing::debug;

use hplc_model::{CalibrationModel, ConsolidatedPeakTable};

use crate::error::{Result, TransformError};

/// One standard: a known concentration paired with its measured peak area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationStandard {
    pub concentration: f64,
    pub area: f64,
}

/// A raw standard-curve entry as typed by the user: a measured area plus a
/// free-text concentration like `"5 ug/mL"`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationInput {
    pub area: f64,
    pub concentration: String,
}

/// Manual mode: a slope and intercept supplied directly.
pub fn manual_model(slope: f64, intercept: f64, units: impl Into<String>) -> Result<CalibrationModel> {
    Ok(CalibrationModel::new(slope, intercept, units)?)
}

/// Split a `"<number> <unit>"` entry into magnitude and unit token.
pub fn parse_concentration(input: &str) -> Result<(f64, String)> {
    let parse_error = || TransformError::ConcentrationParse {
        value: input.to_string(),
    };
    let mut tokens = input.split_whitespace();
    let magnitude = tokens
        .next()
        .ok_or_else(parse_error)?
        .parse::<f64>()
        .map_err(|_| parse_error())?;
    let units = tokens.next().ok_or_else(parse_error)?.to_string();
    Ok((magnitude, units))
}

/// Computed mode from raw user entries.
///
/// The unit token of the first entry is taken for the whole model; later
/// entries are not checked against it (see DESIGN.md).
pub fn fit_from_input(entries: &[CalibrationInput]) -> Result<CalibrationModel> {
    let mut standards = Vec::with_capacity(entries.len());
    let mut units = None;
    for entry in entries {
        let (concentration, unit) = parse_concentration(&entry.concentration)?;
        units.get_or_insert(unit);
        standards.push(CalibrationStandard {
            concentration,
            area: entry.area,
        });
    }
    fit(&standards, units.unwrap_or_default())
}

/// Computed mode: ordinary least squares of
/// `area = slope * concentration + intercept`.
///
/// Requires at least two points covering at least two distinct concentration
/// values; a fit that still comes out flat is rejected the same way a manual
/// zero slope is.
pub fn fit(standards: &[CalibrationStandard], units: impl Into<String>) -> Result<CalibrationModel> {
    let points = standards.len();
    let distinct = distinct_concentrations(standards);
    if points < 2 || distinct < 2 {
        return Err(TransformError::InsufficientCalibrationData { points, distinct });
    }

    let n = points as f64;
    let mean_x = standards.iter().map(|s| s.concentration).sum::<f64>() / n;
    let mean_y = standards.iter().map(|s| s.area).sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut variance = 0.0;
    for standard in standards {
        let dx = standard.concentration - mean_x;
        covariance += dx * (standard.area - mean_y);
        variance += dx * dx;
    }
    let slope = covariance / variance;
    let intercept = mean_y - slope * mean_x;

    debug!(points, slope, intercept, "fitted standard curve");
    Ok(CalibrationModel::new(slope, intercept, units)?)
}

/// Derive the concentration column for every peak row. The measured `area`
/// is left untouched.
pub fn derive_concentrations(table: &mut ConsolidatedPeakTable, model: &CalibrationModel) {
    for row in &mut table.rows {
        row.concentration = Some(model.concentration_for(row.area));
    }
}

fn distinct_concentrations(standards: &[CalibrationStandard]) -> usize {
    let mut values: Vec<u64> = standards
        .iter()
        .map(|s| s.concentration.to_bits())
        .collect();
    values.sort_unstable();
    values.dedup();
    values.len()
}
