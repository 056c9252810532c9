//! Transforms over extracted HPLC data.
//!
//! Three stages, applied in order after ingestion:
//!
//! - **Consolidation** ([`merge`]): concatenate per-file tables and drop
//!   exact-duplicate rows
//! - **Renaming** ([`apply_display_names`]): left join of user-chosen display
//!   names onto both consolidated tables
//! - **Calibration** ([`calibration`]): fit or accept a linear standard curve
//!   and derive a concentration column from peak areas

mod error;
mod merge;
mod rename;

pub mod calibration;

pub use calibration::{
    CalibrationInput, CalibrationStandard, derive_concentrations, fit, fit_from_input,
    manual_model, parse_concentration,
};
pub use error::{Result, TransformError};
pub use merge::merge;
pub use rename::{apply_chromatogram_display_names, apply_display_names, apply_peak_display_names};
