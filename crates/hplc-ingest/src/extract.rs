//! Extracting typed rows from a located report.

use tracing::warn;

use hplc_model::{ChromatogramPoint, PeakRecord};

use crate::error::{IngestError, Result};
use crate::locate::{self, ReportMetadata};
use crate::report::RawReport;

const PEAK_NUMBER_COLUMN: &str = "Peak#";
const PEAK_TIME_COLUMN: &str = "R.Time";
const PEAK_AREA_COLUMN: &str = "Area";
const CHROM_TIME_COLUMN: &str = "R.Time (min)";
const CHROM_INTENSITY_COLUMN: &str = "Intensity";

/// Both embedded tables of one report, tagged with its sample identity.
#[derive(Debug, Clone, Default)]
pub struct ExtractedTables {
    pub peaks: Vec<PeakRecord>,
    pub chromatogram: Vec<ChromatogramPoint>,
    /// Data rows skipped because a required cell was missing or failed
    /// numeric parsing.
    pub dropped_rows: usize,
}

/// One fully ingested report: located metadata plus its extracted tables.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    pub file: String,
    pub metadata: ReportMetadata,
    pub tables: ExtractedTables,
}

/// Locate and extract in one step.
pub fn parse_report(report: &RawReport) -> Result<ParsedReport> {
    let metadata = locate::locate(report)?;
    let tables = extract(report, &metadata)?;
    Ok(ParsedReport {
        file: report.name().to_string(),
        metadata,
        tables,
    })
}

/// Extract both tables. Dropped-row counts from the two tables are combined.
pub fn extract(report: &RawReport, metadata: &ReportMetadata) -> Result<ExtractedTables> {
    let (peaks, dropped_peaks) = extract_peak_table(report, metadata)?;
    let (chromatogram, dropped_points) = extract_chromatogram(report, metadata)?;
    Ok(ExtractedTables {
        peaks,
        chromatogram,
        dropped_rows: dropped_peaks + dropped_points,
    })
}

/// Read the peak table: the line after `# of Peaks` is the column-header row,
/// the `peak_count` lines after that are data rows.
///
/// Returns the records plus the number of dropped rows. A report without a
/// located peak table yields zero rows. A short file yields the rows that
/// exist; the shortfall shows up in the row count.
pub fn extract_peak_table(
    report: &RawReport,
    metadata: &ReportMetadata,
) -> Result<(Vec<PeakRecord>, usize)> {
    let Some(location) = metadata.peak_table else {
        return Ok((Vec::new(), 0));
    };

    let header_line = location.line + 1;
    let header = report
        .line(header_line)
        .ok_or_else(|| IngestError::MissingColumn {
            file: report.name().to_string(),
            column: PEAK_NUMBER_COLUMN,
        })?;
    let columns: Vec<&str> = header.split('\t').collect();
    let number_idx = required_column(report, &columns, PEAK_NUMBER_COLUMN)?;
    let time_idx = required_column(report, &columns, PEAK_TIME_COLUMN)?;
    let area_idx = required_column(report, &columns, PEAK_AREA_COLUMN)?;

    let mut peaks = Vec::with_capacity(location.peak_count);
    let mut dropped = 0usize;
    for offset in 0..location.peak_count {
        let line_index = header_line + 1 + offset;
        let Some(line) = report.line(line_index) else {
            break;
        };
        let cells: Vec<&str> = line.split('\t').collect();
        let parsed = (
            cell_as_i64(&cells, number_idx),
            cell_as_f64(&cells, time_idx),
            cell_as_f64(&cells, area_idx),
        );
        match parsed {
            (Some(peak_number), Some(retention_time), Some(area)) => peaks.push(PeakRecord {
                sample_id: metadata.sample_id.clone(),
                sample_name: metadata.sample_name.clone(),
                peak_number,
                retention_time,
                area,
            }),
            _ => {
                dropped += 1;
                warn!(
                    file = report.name(),
                    line = line_index,
                    "dropped malformed peak row"
                );
            }
        }
    }
    Ok((peaks, dropped))
}

/// Read the chromatogram: the located line is the column-header row, every
/// following line to end of file is a data row.
pub fn extract_chromatogram(
    report: &RawReport,
    metadata: &ReportMetadata,
) -> Result<(Vec<ChromatogramPoint>, usize)> {
    let header = report
        .line(metadata.chromatogram_line)
        .ok_or_else(|| IngestError::MissingColumn {
            file: report.name().to_string(),
            column: CHROM_TIME_COLUMN,
        })?;
    let columns: Vec<&str> = header.split('\t').collect();
    let time_idx = required_column(report, &columns, CHROM_TIME_COLUMN)?;
    let intensity_idx = required_column(report, &columns, CHROM_INTENSITY_COLUMN)?;

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for (offset, line) in report.lines()[metadata.chromatogram_line + 1..]
        .iter()
        .enumerate()
    {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').collect();
        match (
            cell_as_f64(&cells, time_idx),
            cell_as_f64(&cells, intensity_idx),
        ) {
            (Some(retention_time_min), Some(intensity)) => points.push(ChromatogramPoint {
                sample_id: metadata.sample_id.clone(),
                sample_name: metadata.sample_name.clone(),
                retention_time_min,
                intensity,
            }),
            _ => {
                dropped += 1;
                warn!(
                    file = report.name(),
                    line = metadata.chromatogram_line + 1 + offset,
                    "dropped malformed chromatogram row"
                );
            }
        }
    }
    Ok((points, dropped))
}

fn required_column(
    report: &RawReport,
    columns: &[&str],
    name: &'static str,
) -> Result<usize> {
    columns
        .iter()
        .position(|c| c.trim() == name)
        .ok_or_else(|| IngestError::MissingColumn {
            file: report.name().to_string(),
            column: name,
        })
}

fn cell_as_f64(cells: &[&str], index: usize) -> Option<f64> {
    cells.get(index).and_then(|c| c.trim().parse::<f64>().ok())
}

fn cell_as_i64(cells: &[&str], index: usize) -> Option<i64> {
    cells.get(index).and_then(|c| c.trim().parse::<i64>().ok())
}
