//! CSV serialization of the consolidated peak table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hplc_model::ConsolidatedPeakTable;

use crate::error::Result;

/// Write the peak table as UTF-8 CSV to any writer.
///
/// Column layout follows the interactive download: `Sample ID`,
/// `New Sample Name`, `Peak#`, `R.Time`, `Area`, and — only when at least one
/// row carries a derived value — `Calculated Concentration (<units>)`. Null
/// display names and missing concentrations serialize as empty fields.
pub fn write_peak_table<W: Write>(
    table: &ConsolidatedPeakTable,
    units: Option<&str>,
    writer: W,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let with_concentration = table.rows.iter().any(|row| row.concentration.is_some());
    let mut header = vec![
        "Sample ID".to_string(),
        "New Sample Name".to_string(),
        "Peak#".to_string(),
        "R.Time".to_string(),
        "Area".to_string(),
    ];
    if with_concentration {
        header.push(format!(
            "Calculated Concentration ({})",
            units.unwrap_or_default()
        ));
    }
    csv_writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![
            row.sample_id.clone(),
            row.display_name.clone().unwrap_or_default(),
            row.peak_number.to_string(),
            row.retention_time.to_string(),
            row.area.to_string(),
        ];
        if with_concentration {
            record.push(
                row.concentration
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            );
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the peak table CSV to a file path.
pub fn write_peak_table_csv(
    table: &ConsolidatedPeakTable,
    units: Option<&str>,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)?;
    write_peak_table(table, units, BufWriter::new(file))
}
