//! Locating the embedded tables and scalar metadata inside a report.

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::report::RawReport;

const SAMPLE_NAME_KEY: &str = "Sample Name";
const SAMPLE_ID_KEY: &str = "Sample ID";
const PEAK_TABLE_SECTION: &str = "[Peak Table(Detector A-Ch1)]";
const PEAK_COUNT_KEY: &str = "# of Peaks";
const CHROMATOGRAM_KEY: &str = "R.Time (min)";

/// Where the peak-table section sits inside a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakTableLocation {
    /// Line index of the `# of Peaks` row. The column-header row is the next
    /// line; data rows follow it.
    pub line: usize,
    pub peak_count: usize,
}

/// Scalar metadata and table offsets found by a single scan of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    pub sample_name: String,
    pub sample_id: String,
    /// `None` when the section header was never followed by `# of Peaks`;
    /// the peak table is then empty, not an error.
    pub peak_table: Option<PeakTableLocation>,
    /// Line index of the chromatogram's column-header row.
    pub chromatogram_line: usize,
}

/// Scan a report's lines once, top to bottom, recognizing fields by the exact
/// tab-delimited key in column 0.
///
/// Repeated keys overwrite earlier matches (last-wins), matching a single
/// pass over a file that holds one detector channel. Fails when `Sample ID`,
/// `Sample Name`, or the chromatogram header is never seen; those are
/// required to tag and extract the tables downstream.
pub fn locate(report: &RawReport) -> Result<ReportMetadata> {
    let mut sample_name = None;
    let mut sample_id = None;
    let mut peak_table = None;
    let mut chromatogram_line = None;
    let mut awaiting_peak_count = false;

    for (index, line) in report.lines().iter().enumerate() {
        let mut columns = line.split('\t');
        let key = columns.next().unwrap_or("");
        let value = columns.next().unwrap_or("");

        match key {
            SAMPLE_NAME_KEY => sample_name = Some(value.to_string()),
            SAMPLE_ID_KEY => sample_id = Some(value.to_string()),
            PEAK_TABLE_SECTION => awaiting_peak_count = true,
            PEAK_COUNT_KEY if awaiting_peak_count => {
                let peak_count =
                    value
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| IngestError::InvalidPeakCount {
                            file: report.name().to_string(),
                            value: value.to_string(),
                        })?;
                peak_table = Some(PeakTableLocation {
                    line: index,
                    peak_count,
                });
                awaiting_peak_count = false;
            }
            CHROMATOGRAM_KEY => chromatogram_line = Some(index),
            _ => {}
        }
    }

    let missing = |field| IngestError::MalformedReport {
        file: report.name().to_string(),
        missing: field,
    };
    let sample_name = sample_name.ok_or_else(|| missing("Sample Name"))?;
    let sample_id = sample_id.ok_or_else(|| missing("Sample ID"))?;
    let chromatogram_line = chromatogram_line.ok_or_else(|| missing("chromatogram header"))?;

    debug!(
        file = report.name(),
        sample_id = %sample_id,
        ?peak_table,
        chromatogram_line,
        "located report sections"
    );

    Ok(ReportMetadata {
        sample_name,
        sample_id,
        peak_table,
        chromatogram_line,
    })
}
