use runtime::error::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("Invalid source kind: {0}")]
    InvalidSourceKind(String),
    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
