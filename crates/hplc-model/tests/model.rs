//! Tests for the shared data model.

use hplc_model::{
    AnalysisSummary, CalibrationModel, FileError, FileResult, PeakRecord, PeakRow, SampleIdentity,
};

#[test]
fn display_falls_back_to_sample_name() {
    let identity = SampleIdentity::new("S1", "Std1");
    assert_eq!(identity.display(), "Std1");

    let renamed = identity.with_display_name("Standard 1");
    assert_eq!(renamed.display(), "Standard 1");
}

#[test]
fn peak_row_defaults_display_name_to_sample_name() {
    let record = PeakRecord {
        sample_id: "S1".to_string(),
        sample_name: "Std1".to_string(),
        peak_number: 1,
        retention_time: 2.31,
        area: 15234.0,
    };
    let row = PeakRow::from(record);
    assert_eq!(row.display_name.as_deref(), Some("Std1"));
    assert_eq!(row.concentration, None);
    assert_eq!(row.area, 15234.0);
}

#[test]
fn calibration_model_round_trips_through_json() {
    let model = CalibrationModel::new(10.0, -2.5, "ug/mL").unwrap();
    let json = serde_json::to_string(&model).expect("serialize model");
    let round: CalibrationModel = serde_json::from_str(&json).expect("deserialize model");
    assert_eq!(round, model);
    assert_eq!(round.units(), "ug/mL");
}

#[test]
fn summary_counts_dropped_rows_across_files() {
    let summary = AnalysisSummary {
        files: vec![
            FileResult {
                file: "a.txt".to_string(),
                peaks: 3,
                chromatogram_points: 1200,
                dropped_rows: 1,
            },
            FileResult {
                file: "b.txt".to_string(),
                peaks: 2,
                chromatogram_points: 1200,
                dropped_rows: 2,
            },
        ],
        errors: vec![FileError {
            file: "c.txt".to_string(),
            message: "missing Sample ID".to_string(),
        }],
        peak_rows: 5,
        chromatogram_rows: 2400,
    };
    assert_eq!(summary.dropped_rows(), 3);
    assert!(summary.has_errors());
}
