use connectors::{file::csv::error::FileError, sqlite::error::SqliteError};
use thiserror::Error;
use transform::error::TransformError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Extraction failed: {0}")]
    Sqlite(#[from] SqliteError),
    #[error("File error: {0}")]
    File(#[from] FileError),
    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
