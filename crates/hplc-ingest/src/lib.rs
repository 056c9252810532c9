//! HPLC report ingestion.
//!
//! This crate reads one instrument-exported report file (tab-delimited text
//! with mixed metadata and two embedded tabular sections) and produces typed
//! rows tagged with the report's sample identity.
//!
//! # Pipeline
//!
//! - **Reading**: [`RawReport`] holds the file name and its lines, read once
//!   up front so no handle outlives the parse
//! - **Locating**: [`locate`] scans the lines top to bottom for the scalar
//!   metadata fields and the offsets of the two embedded tables
//! - **Extracting**: [`extract`] reads the peak table and chromatogram as
//!   typed records, dropping (and counting) rows that fail numeric parsing
//!
//! A report missing `Sample ID`, `Sample Name`, or the chromatogram header is
//! rejected whole; a malformed data row only costs that row.

mod error;
mod extract;
mod locate;
mod report;

pub use error::{IngestError, Result};
pub use extract::{
    ExtractedTables, ParsedReport, extract, extract_chromatogram, extract_peak_table, parse_report,
};
pub use locate::{PeakTableLocation, ReportMetadata, locate};
pub use report::RawReport;
