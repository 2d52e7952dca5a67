use crate::file::csv::error::FileError;
use model::sales::enriched::{EnrichedSalesRecord, OUTPUT_COLUMNS};
use std::path::Path;
use tracing::info;

/// Writes the enriched table with the stable output column order. Null
/// cells are written empty.
pub fn write_enriched(
    path: impl AsRef<Path>,
    rows: &[EnrichedSalesRecord],
) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        let cells: Vec<String> = row.values().iter().map(|v| v.to_string()).collect();
        writer.write_record(&cells)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Writes one aggregated summary view as a plain CSV table.
pub fn write_table(
    path: impl AsRef<Path>,
    columns: &[String],
    rows: &[Vec<String>],
) -> Result<(), FileError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
