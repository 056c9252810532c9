//! Session state for one analysis pass.

use std::path::Path;

use tracing::{debug, warn};

use hplc_ingest::{ParsedReport, RawReport, parse_report};
use hplc_model::{
    AnalysisSummary, CalibrationModel, ConsolidatedChromatogram, ConsolidatedPeakTable, FileError,
    FileResult, SampleIdentity,
};
use hplc_output::ChartOptions;
use hplc_transform::{CalibrationInput, TransformError};

use crate::error::{AnalysisError, Result};

/// All state owned by one analysis pass. Nothing is shared across sessions
/// and nothing survives the session.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    reports: Vec<ParsedReport>,
    failures: Vec<FileError>,
    peaks: ConsolidatedPeakTable,
    chromatogram: ConsolidatedChromatogram,
    calibration: Option<CalibrationModel>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse one report file. The file is fully read and its handle
    /// released before parsing; a failure is recorded against the file name
    /// and never aborts the session.
    pub fn ingest_path(&mut self, path: &Path) {
        match RawReport::from_path(path) {
            Ok(report) => self.ingest_report(&report),
            Err(err) => self.reject(path.display().to_string(), &err.to_string()),
        }
    }

    /// Parse one already-read report, as handed over by an upload layer.
    pub fn ingest_report(&mut self, report: &RawReport) {
        match parse_report(report) {
            Ok(parsed) => {
                if parsed.tables.dropped_rows > 0 {
                    warn!(
                        file = %parsed.file,
                        dropped = parsed.tables.dropped_rows,
                        "report ingested with dropped rows"
                    );
                }
                self.reports.push(parsed);
            }
            Err(err) => self.reject(report.name().to_string(), &err.to_string()),
        }
    }

    fn reject(&mut self, file: String, message: &str) {
        warn!(file = %file, error = message, "report rejected");
        self.failures.push(FileError {
            file,
            message: message.to_string(),
        });
    }

    /// Merge everything ingested so far into the consolidated tables and
    /// summarize the pass.
    pub fn compile(&mut self) -> AnalysisSummary {
        let (peaks, chromatogram) = hplc_transform::merge(
            self.reports
                .iter()
                .map(|r| (r.tables.peaks.as_slice(), r.tables.chromatogram.as_slice())),
        );
        self.peaks = peaks;
        self.chromatogram = chromatogram;

        AnalysisSummary {
            files: self
                .reports
                .iter()
                .map(|r| FileResult {
                    file: r.file.clone(),
                    peaks: r.tables.peaks.len(),
                    chromatogram_points: r.tables.chromatogram.len(),
                    dropped_rows: r.tables.dropped_rows,
                })
                .collect(),
            errors: self.failures.clone(),
            peak_rows: self.peaks.len(),
            chromatogram_rows: self.chromatogram.len(),
        }
    }

    /// Distinct (sample id, sample name) pairs from the consolidated peak
    /// table, in first-seen order. Seeds the rename editor.
    pub fn identities(&self) -> Vec<SampleIdentity> {
        let mut identities: Vec<SampleIdentity> = Vec::new();
        for row in &self.peaks.rows {
            let seen = identities
                .iter()
                .any(|id| id.sample_id == row.sample_id && id.sample_name == row.sample_name);
            if !seen {
                identities.push(SampleIdentity::new(
                    row.sample_id.clone(),
                    row.sample_name.clone(),
                ));
            }
        }
        identities
    }

    /// Apply user-chosen display names to both consolidated tables.
    pub fn rename_samples(&mut self, identities: &[SampleIdentity]) {
        hplc_transform::apply_display_names(&mut self.peaks, &mut self.chromatogram, identities);
    }

    /// Manual calibration mode. On failure the session's model stays unset
    /// and the peak table remains usable without the derived column.
    pub fn set_manual_calibration(
        &mut self,
        slope: f64,
        intercept: f64,
        units: &str,
    ) -> std::result::Result<(), TransformError> {
        self.set_calibration(hplc_transform::manual_model(slope, intercept, units))
    }

    /// Computed calibration mode from raw standard-curve entries.
    pub fn fit_calibration(
        &mut self,
        entries: &[CalibrationInput],
    ) -> std::result::Result<(), TransformError> {
        self.set_calibration(hplc_transform::fit_from_input(entries))
    }

    fn set_calibration(
        &mut self,
        model: std::result::Result<CalibrationModel, TransformError>,
    ) -> std::result::Result<(), TransformError> {
        match model {
            Ok(model) => {
                debug!(
                    slope = model.slope(),
                    intercept = model.intercept(),
                    units = model.units(),
                    "calibration model set"
                );
                self.calibration = Some(model);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "calibration skipped");
                self.calibration = None;
                Err(err)
            }
        }
    }

    /// Fill the derived concentration column from the current model. Returns
    /// whether a model was present; without one the column stays empty
    /// rather than fabricated.
    pub fn calculate_concentrations(&mut self) -> bool {
        match &self.calibration {
            Some(model) => {
                hplc_transform::derive_concentrations(&mut self.peaks, model);
                true
            }
            None => false,
        }
    }

    pub fn peak_table(&self) -> &ConsolidatedPeakTable {
        &self.peaks
    }

    pub fn chromatogram(&self) -> &ConsolidatedChromatogram {
        &self.chromatogram
    }

    pub fn calibration(&self) -> Option<&CalibrationModel> {
        self.calibration.as_ref()
    }

    /// The (times, intensities) trace for one display name, for charting.
    pub fn chromatogram_trace(&self, display_name: &str) -> Option<(Vec<f64>, Vec<f64>)> {
        let mut times = Vec::new();
        let mut intensities = Vec::new();
        for row in &self.chromatogram.rows {
            if row.display_name.as_deref() == Some(display_name) {
                times.push(row.retention_time_min);
                intensities.push(row.intensity);
            }
        }
        if times.is_empty() {
            None
        } else {
            Some((times, intensities))
        }
    }

    /// Write the consolidated peak table as a downloadable CSV.
    pub fn export_peak_table_csv(&self, path: &Path) -> Result<()> {
        let units = self.calibration.as_ref().map(|m| m.units());
        hplc_output::write_peak_table_csv(&self.peaks, units, path)?;
        Ok(())
    }

    /// Render one sample's chromatogram to `chromatogram<name>.png` inside
    /// `dir`, returning the written path.
    pub fn export_chromatogram_png(
        &self,
        display_name: &str,
        dir: &Path,
    ) -> Result<std::path::PathBuf> {
        let (times, intensities) =
            self.chromatogram_trace(display_name)
                .ok_or_else(|| AnalysisError::UnknownSample {
                    sample: display_name.to_string(),
                })?;
        let path = dir.join(hplc_output::chromatogram_file_name(display_name));
        hplc_output::write_chromatogram_png(&times, &intensities, &ChartOptions::default(), &path)?;
        Ok(path)
    }
}
