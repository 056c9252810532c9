//! End-to-end session tests.

use hplc_core::AnalysisSession;
use hplc_ingest::RawReport;
use hplc_model::SampleIdentity;
use hplc_transform::CalibrationInput;

fn report_text(sample_id: &str, sample_name: &str, areas: &[f64]) -> String {
    let mut lines = vec![
        "[Sample Information]".to_string(),
        format!("Sample Name\t{sample_name}"),
        format!("Sample ID\t{sample_id}"),
        "[Peak Table(Detector A-Ch1)]".to_string(),
        format!("# of Peaks\t{}", areas.len()),
        "Peak#\tR.Time\tArea".to_string(),
    ];
    for (i, area) in areas.iter().enumerate() {
        lines.push(format!("{}\t{}\t{}", i + 1, (i + 1) as f64 * 1.5, area));
    }
    lines.push("[Chromatogram(Detector A-Ch1)]".to_string());
    lines.push("R.Time (min)\tIntensity".to_string());
    for i in 0..10 {
        lines.push(format!("{}\t{}", i as f64 * 0.1, i * 3));
    }
    lines.join("\n")
}

fn ingest(session: &mut AnalysisSession, name: &str, text: &str) {
    session.ingest_report(&RawReport::from_text(name, text));
}

#[test]
fn rows_are_tagged_with_their_own_file_identity() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "a.txt", &report_text("S1", "Std1", &[100.0]));
    ingest(&mut session, "b.txt", &report_text("S2", "Unk", &[55.0]));
    let summary = session.compile();

    assert_eq!(summary.peak_rows, 2);
    assert!(!summary.has_errors());
    let table = session.peak_table();
    assert_eq!(table.rows[0].sample_id, "S1");
    assert_eq!(table.rows[1].sample_id, "S2");
    assert!(
        session
            .chromatogram()
            .rows
            .iter()
            .all(|r| r.sample_id == "S1" || r.sample_id == "S2")
    );
}

#[test]
fn duplicate_upload_collapses_to_one_file_worth_of_rows() {
    let text = report_text("S1", "Std1", &[100.0, 200.0]);
    let mut single = AnalysisSession::new();
    ingest(&mut single, "a.txt", &text);
    let single_summary = single.compile();

    let mut double = AnalysisSession::new();
    ingest(&mut double, "a.txt", &text);
    ingest(&mut double, "a (copy).txt", &text);
    let double_summary = double.compile();

    assert_eq!(double_summary.peak_rows, single_summary.peak_rows);
    assert_eq!(
        double_summary.chromatogram_rows,
        single_summary.chromatogram_rows
    );
    // Both files still parsed and reported individually.
    assert_eq!(double_summary.files.len(), 2);
}

#[test]
fn malformed_file_is_isolated() {
    let bad = report_text("S1", "Std1", &[100.0]).replace("Sample ID\tS1\n", "");
    let mut session = AnalysisSession::new();
    ingest(&mut session, "bad.txt", &bad);
    ingest(&mut session, "good.txt", &report_text("S2", "Unk", &[55.0]));
    let summary = session.compile();

    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].file, "bad.txt");
    assert!(summary.errors[0].message.contains("Sample ID"));
    // The bad file contributed zero rows; the good one is intact.
    assert_eq!(summary.peak_rows, 1);
    assert_eq!(session.peak_table().rows[0].sample_id, "S2");
}

#[test]
fn identities_come_back_in_first_seen_order() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "b.txt", &report_text("S2", "Unk", &[55.0]));
    ingest(&mut session, "a.txt", &report_text("S1", "Std1", &[100.0, 200.0]));
    session.compile();

    let identities = session.identities();
    assert_eq!(identities.len(), 2);
    assert_eq!(identities[0].sample_id, "S2");
    assert_eq!(identities[1].sample_id, "S1");
    assert_eq!(identities[1].display(), "Std1");
}

#[test]
fn rename_then_trace_lookup_uses_display_names() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "a.txt", &report_text("S1", "Std1", &[100.0]));
    session.compile();

    let identities = vec![SampleIdentity::new("S1", "Std1").with_display_name("Standard 1")];
    session.rename_samples(&identities);

    assert!(session.chromatogram_trace("Std1").is_none());
    let (times, intensities) = session.chromatogram_trace("Standard 1").unwrap();
    assert_eq!(times.len(), 10);
    assert_eq!(intensities[3], 9.0);
}

#[test]
fn calibration_flow_derives_concentrations() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "unk.txt", &report_text("S9", "Unk", &[25.0]));
    session.compile();

    // Without a model nothing is derived.
    assert!(!session.calculate_concentrations());
    assert_eq!(session.peak_table().rows[0].concentration, None);

    session.set_manual_calibration(10.0, 0.0, "ug/mL").unwrap();
    assert!(session.calculate_concentrations());
    assert_eq!(session.peak_table().rows[0].concentration, Some(2.5));
    assert_eq!(session.peak_table().rows[0].area, 25.0);
}

#[test]
fn failed_calibration_leaves_model_unset() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "unk.txt", &report_text("S9", "Unk", &[25.0]));
    session.compile();

    assert!(session.set_manual_calibration(0.0, 3.0, "ug/mL").is_err());
    assert!(session.calibration().is_none());
    assert!(!session.calculate_concentrations());
}

#[test]
fn fitted_calibration_from_standard_entries() {
    let mut session = AnalysisSession::new();
    ingest(&mut session, "unk.txt", &report_text("S9", "Unk", &[25.0]));
    session.compile();

    let entries = vec![
        CalibrationInput {
            area: 10.0,
            concentration: "1 ug/mL".to_string(),
        },
        CalibrationInput {
            area: 20.0,
            concentration: "2 ug/mL".to_string(),
        },
        CalibrationInput {
            area: 30.0,
            concentration: "3 ug/mL".to_string(),
        },
    ];
    session.fit_calibration(&entries).unwrap();
    session.calculate_concentrations();
    assert_eq!(session.peak_table().rows[0].concentration, Some(2.5));
    assert_eq!(session.calibration().unwrap().units(), "ug/mL");
}

#[test]
fn exports_land_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = AnalysisSession::new();
    ingest(&mut session, "a.txt", &report_text("S1", "Std1", &[100.0]));
    session.compile();
    session.set_manual_calibration(10.0, 0.0, "ug/mL").unwrap();
    session.calculate_concentrations();

    let csv_path = dir.path().join("compiled_data.csv");
    session.export_peak_table_csv(&csv_path).unwrap();
    let text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(text.starts_with("Sample ID,New Sample Name,Peak#,R.Time,Area,"));
    assert!(text.contains("Calculated Concentration (ug/mL)"));

    let png_path = session.export_chromatogram_png("Std1", dir.path()).unwrap();
    assert_eq!(
        png_path.file_name().unwrap().to_str().unwrap(),
        "chromatogramStd1.png"
    );
    assert!(png_path.exists());
}
