//! The HPLC analysis session.
//!
//! One [`AnalysisSession`] owns all state for one analysis pass: the parsed
//! reports, the consolidated tables, the sample identities, and the optional
//! calibration model. A front end drives it synchronously:
//!
//! ```ignore
//! let mut session = AnalysisSession::new();
//! for path in uploaded_files {
//!     session.ingest_path(path);
//! }
//! let summary = session.compile();
//! session.rename_samples(&identities);
//! session.set_manual_calibration(10.0, 0.0, "ug/mL")?;
//! session.calculate_concentrations();
//! session.export_peak_table_csv(&output_path)?;
//! ```
//!
//! Per-file failures are captured into the summary, never propagated across
//! files; calibration failures leave the peak table usable without the
//! derived column.

mod error;
mod session;

pub use error::{AnalysisError, Result};
pub use session::AnalysisSession;
