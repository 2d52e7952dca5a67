use crate::error::SchemaError;
use model::{records::batch::RecordBatch, schema};

/// Structural check run once per batch, before any row work. Every column
/// of the expected sales schema must be present with its declared type;
/// extra columns in the batch are ignored.
pub fn check(batch: &RecordBatch) -> Result<(), SchemaError> {
    let expected = schema::sales_input();
    for column in &expected.columns {
        match batch.column(&column.name) {
            None => {
                return Err(SchemaError::MissingColumn {
                    column: column.name.clone(),
                });
            }
            Some(actual) if actual.data_type != column.data_type => {
                return Err(SchemaError::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.data_type,
                    actual: actual.data_type,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
