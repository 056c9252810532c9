//! Display-name assignment for consolidated tables.

use std::collections::BTreeMap;

use hplc_model::{ConsolidatedChromatogram, ConsolidatedPeakTable, SampleIdentity};

/// Apply user-chosen display names to both tables.
///
/// The join is keyed on the original `sample_name`, not `sample_id`: two
/// samples from different files sharing a name are renamed together. That
/// coupling is intentional; see DESIGN.md. Rows whose sample name has no
/// entry in `identities` get a null display name.
pub fn apply_display_names(
    peaks: &mut ConsolidatedPeakTable,
    chromatogram: &mut ConsolidatedChromatogram,
    identities: &[SampleIdentity],
) {
    apply_peak_display_names(peaks, identities);
    apply_chromatogram_display_names(chromatogram, identities);
}

pub fn apply_peak_display_names(table: &mut ConsolidatedPeakTable, identities: &[SampleIdentity]) {
    let by_name = display_names_by_sample_name(identities);
    for row in &mut table.rows {
        row.display_name = by_name
            .get(row.sample_name.as_str())
            .and_then(|name| name.map(str::to_string));
    }
}

pub fn apply_chromatogram_display_names(
    table: &mut ConsolidatedChromatogram,
    identities: &[SampleIdentity],
) {
    let by_name = display_names_by_sample_name(identities);
    for row in &mut table.rows {
        row.display_name = by_name
            .get(row.sample_name.as_str())
            .and_then(|name| name.map(str::to_string));
    }
}

fn display_names_by_sample_name(identities: &[SampleIdentity]) -> BTreeMap<&str, Option<&str>> {
    identities
        .iter()
        .map(|id| (id.sample_name.as_str(), id.display_name.as_deref()))
        .collect()
}
