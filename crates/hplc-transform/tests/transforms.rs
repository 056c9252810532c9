//! Tests for consolidation and renaming.

use hplc_model::{ChromatogramPoint, PeakRecord, SampleIdentity};
use hplc_transform::{apply_display_names, merge};

fn peak(sample_id: &str, sample_name: &str, peak_number: i64, area: f64) -> PeakRecord {
    PeakRecord {
        sample_id: sample_id.to_string(),
        sample_name: sample_name.to_string(),
        peak_number,
        retention_time: 1.5 * peak_number as f64,
        area,
    }
}

fn point(sample_id: &str, sample_name: &str, time: f64, intensity: f64) -> ChromatogramPoint {
    ChromatogramPoint {
        sample_id: sample_id.to_string(),
        sample_name: sample_name.to_string(),
        retention_time_min: time,
        intensity,
    }
}

#[test]
fn merging_the_same_file_twice_is_idempotent() {
    let peaks = vec![peak("S1", "Std1", 1, 100.0), peak("S1", "Std1", 2, 200.0)];
    let points = vec![point("S1", "Std1", 0.0, 5.0), point("S1", "Std1", 0.5, 8.0)];

    let (once_peaks, once_chrom) = merge([(peaks.as_slice(), points.as_slice())]);
    let (twice_peaks, twice_chrom) = merge([
        (peaks.as_slice(), points.as_slice()),
        (peaks.as_slice(), points.as_slice()),
    ]);

    assert_eq!(once_peaks, twice_peaks);
    assert_eq!(once_chrom, twice_chrom);
    assert_eq!(twice_peaks.len(), 2);
    assert_eq!(twice_chrom.len(), 2);
}

#[test]
fn shared_peak_numbers_across_samples_are_kept() {
    let a = vec![peak("S1", "Std1", 1, 100.0)];
    let b = vec![peak("S2", "Std2", 1, 100.0)];
    let empty: Vec<ChromatogramPoint> = Vec::new();

    let (peaks, _) = merge([(a.as_slice(), empty.as_slice()), (b.as_slice(), empty.as_slice())]);

    // Same peak number and area, but different sample: both rows survive.
    assert_eq!(peaks.len(), 2);
}

#[test]
fn merge_preserves_upload_order() {
    let a = vec![peak("S2", "Unk", 1, 50.0)];
    let b = vec![peak("S1", "Std1", 1, 100.0)];
    let empty: Vec<ChromatogramPoint> = Vec::new();

    let (peaks, _) = merge([(a.as_slice(), empty.as_slice()), (b.as_slice(), empty.as_slice())]);
    assert_eq!(peaks.rows[0].sample_id, "S2");
    assert_eq!(peaks.rows[1].sample_id, "S1");
}

#[test]
fn display_name_defaults_to_sample_name() {
    let peaks = vec![peak("S1", "Std1", 1, 100.0)];
    let points = vec![point("S1", "Std1", 0.0, 5.0)];
    let (table, chrom) = merge([(peaks.as_slice(), points.as_slice())]);

    assert_eq!(table.rows[0].display_name.as_deref(), Some("Std1"));
    assert_eq!(chrom.rows[0].display_name.as_deref(), Some("Std1"));
}

#[test]
fn rename_joins_on_sample_name() {
    let a = vec![peak("S1", "Std1", 1, 100.0)];
    // Different id, same name: renamed together with S1 (name-keyed join).
    let b = vec![peak("S9", "Std1", 1, 150.0)];
    let c = vec![peak("S2", "Unknown", 1, 75.0)];
    let points = vec![point("S1", "Std1", 0.0, 5.0)];
    let empty: Vec<ChromatogramPoint> = Vec::new();
    let (mut table, mut chrom) = merge([
        (a.as_slice(), points.as_slice()),
        (b.as_slice(), empty.as_slice()),
        (c.as_slice(), empty.as_slice()),
    ]);

    let identities = vec![SampleIdentity::new("S1", "Std1").with_display_name("Standard 1")];
    apply_display_names(&mut table, &mut chrom, &identities);

    assert_eq!(table.rows[0].display_name.as_deref(), Some("Standard 1"));
    assert_eq!(table.rows[1].display_name.as_deref(), Some("Standard 1"));
    // No entry for "Unknown": display name goes null, row is kept.
    assert_eq!(table.rows[2].display_name, None);
    assert_eq!(chrom.rows[0].display_name.as_deref(), Some("Standard 1"));
}

#[test]
fn rename_entry_without_display_name_clears_it() {
    let a = vec![peak("S1", "Std1", 1, 100.0)];
    let empty: Vec<ChromatogramPoint> = Vec::new();
    let (mut table, mut chrom) = merge([(a.as_slice(), empty.as_slice())]);

    let identities = vec![SampleIdentity::new("S1", "Std1")];
    apply_display_names(&mut table, &mut chrom, &identities);
    assert_eq!(table.rows[0].display_name, None);
}
