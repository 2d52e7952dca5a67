use model::core::data_type::DataType;
use serde::Serialize;
use thiserror::Error;

/// Fatal, per-run: the input table is structurally incompatible with the
/// expected sales schema. Enriching anyway would silently corrupt every
/// derived column, so the run aborts before any row work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("column `{column}` is missing from the input table")]
    MissingColumn { column: String },

    #[error("column `{column}` has type {actual:?}, expected {expected:?}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("input schema mismatch: {0}")]
    Schema(#[from] SchemaError),
}

/// Recoverable, per-row: the row is dropped, the reason counted in the
/// quality report, and processing continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    DuplicateRecord,
    InvalidRange,
    MissingRequiredField,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::DuplicateRecord => "duplicate_record",
            DropReason::InvalidRange => "invalid_range",
            DropReason::MissingRequiredField => "missing_required_field",
        }
    }
}
