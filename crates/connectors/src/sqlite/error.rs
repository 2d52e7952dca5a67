use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqliteError {
    #[error("Database file not found: {0}")]
    NotFound(String),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
