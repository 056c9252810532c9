//! Typed data model for HPLC report analysis.
//!
//! This crate defines the records shared across the workspace:
//!
//! - **Extracted records**: [`PeakRecord`] and [`ChromatogramPoint`], one per
//!   row of the embedded report tables, tagged with their sample identity
//! - **Consolidated tables**: [`ConsolidatedPeakTable`] and
//!   [`ConsolidatedChromatogram`], the merged cross-file datasets handed to
//!   the presentation layer
//! - **Sample identity**: [`SampleIdentity`] with an optional user-facing
//!   display name
//! - **Calibration**: [`CalibrationModel`], the linear standard curve used to
//!   convert peak area into concentration
//! - **Processing summaries**: per-file results and errors surfaced after an
//!   analysis pass

pub mod calibration;
pub mod error;
pub mod identity;
pub mod processing;
pub mod records;
pub mod tables;

pub use calibration::CalibrationModel;
pub use error::{ModelError, Result};
pub use identity::SampleIdentity;
pub use processing::{AnalysisSummary, FileError, FileResult};
pub use records::{ChromatogramPoint, PeakRecord};
pub use tables::{ChromatogramRow, ConsolidatedChromatogram, ConsolidatedPeakTable, PeakRow};
