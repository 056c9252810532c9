//! HPLC output generation.
//!
//! This crate serializes the consolidated datasets for download:
//!
//! - **CSV**: the consolidated peak table, UTF-8 comma-separated, with the
//!   derived concentration column included only when it was actually computed
//! - **PNG**: one rendered intensity-vs-time chart per selected sample

mod chart;
mod error;
mod peak_table;

pub use chart::{
    ChartOptions, chromatogram_file_name, render_chromatogram, write_chromatogram_png,
};
pub use error::{OutputError, Result};
pub use peak_table::{write_peak_table, write_peak_table_csv};
