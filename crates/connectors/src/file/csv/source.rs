use crate::file::csv::error::FileError;
use model::{
    core::data_type::DataType,
    records::{
        batch::RecordBatch,
        row::{FieldValue, RowData},
    },
    schema::{self, ColumnMeta},
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a pre-extracted flat sales file.
///
/// The header row is matched against the expected input schema by
/// normalized name, so "Order Date" and "order_date" are the same column.
/// Matched columns carry their declared type; extra columns ride along as
/// strings and are ignored by the transform. Cells are typed per column,
/// with empty or unparseable cells read as null.
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(FileError::NotFound(path.display().to_string()));
        }
        Ok(CsvDataSource { path })
    }

    /// Materializes the whole file (or the first `limit` data rows) as one
    /// batch.
    pub fn read(&self, limit: Option<usize>) -> Result<RecordBatch, FileError> {
        let expected = schema::sales_input();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        let mut columns = Vec::with_capacity(headers.len());
        for (ordinal, header) in headers.iter().enumerate() {
            let name = normalize_col_name(header);
            let column = match expected.column(&name) {
                Some(spec) => ColumnMeta {
                    name,
                    data_type: spec.data_type,
                    required: spec.required,
                    ordinal,
                },
                None => ColumnMeta {
                    name,
                    data_type: DataType::String,
                    required: false,
                    ordinal,
                },
            };
            columns.push(column);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            if let Some(limit) = limit
                && rows.len() >= limit
            {
                break;
            }
            let record = record?;
            let fields = columns
                .iter()
                .map(|col| {
                    let cell = record.get(col.ordinal).unwrap_or("");
                    FieldValue::new(&col.name, col.data_type.parse(cell))
                })
                .collect();
            rows.push(RowData::new(fields));
        }

        info!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(RecordBatch::new("sales", columns, rows))
    }
}

pub fn normalize_col_name(name: &str) -> String {
    name.replace(" ", "_")
        .replace("-", "_")
        .replace(".", "_")
        .to_lowercase()
}
