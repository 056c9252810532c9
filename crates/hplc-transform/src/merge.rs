//! Consolidation of per-file tables into session-wide tables.

use std::collections::HashSet;

use tracing::debug;

use hplc_model::{
    ChromatogramPoint, ChromatogramRow, ConsolidatedChromatogram, ConsolidatedPeakTable,
    PeakRecord, PeakRow,
};

/// Merge per-file tables into the two consolidated datasets.
///
/// Rows are concatenated in upload order, then exact duplicates are dropped:
/// every retained column must match (floats by bit pattern, i.e. the same
/// text parsed to the same value). Duplicates arise when the same file is
/// uploaded twice; key-based dedup would wrongly collapse distinct peaks that
/// merely share a peak number. First occurrence wins.
pub fn merge<'a, I>(files: I) -> (ConsolidatedPeakTable, ConsolidatedChromatogram)
where
    I: IntoIterator<Item = (&'a [PeakRecord], &'a [ChromatogramPoint])>,
{
    let mut peaks = ConsolidatedPeakTable::default();
    let mut chromatogram = ConsolidatedChromatogram::default();
    let mut seen_peaks = HashSet::new();
    let mut seen_points = HashSet::new();
    let mut total_peaks = 0usize;
    let mut total_points = 0usize;

    for (file_peaks, file_points) in files {
        total_peaks += file_peaks.len();
        total_points += file_points.len();
        for record in file_peaks {
            if seen_peaks.insert(peak_key(record)) {
                peaks.rows.push(PeakRow::from(record.clone()));
            }
        }
        for point in file_points {
            if seen_points.insert(point_key(point)) {
                chromatogram.rows.push(ChromatogramRow::from(point.clone()));
            }
        }
    }

    debug!(
        peak_rows = peaks.len(),
        peak_duplicates = total_peaks - peaks.len(),
        chromatogram_rows = chromatogram.len(),
        chromatogram_duplicates = total_points - chromatogram.len(),
        "consolidated uploaded reports"
    );
    (peaks, chromatogram)
}

fn peak_key(record: &PeakRecord) -> (String, String, i64, u64, u64) {
    (
        record.sample_id.clone(),
        record.sample_name.clone(),
        record.peak_number,
        record.retention_time.to_bits(),
        record.area.to_bits(),
    )
}

fn point_key(point: &ChromatogramPoint) -> (String, String, u64, u64) {
    (
        point.sample_id.clone(),
        point.sample_name.clone(),
        point.retention_time_min.to_bits(),
        point.intensity.to_bits(),
    )
}
