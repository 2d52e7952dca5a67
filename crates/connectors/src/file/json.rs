use crate::file::csv::error::FileError;
use serde::Serialize;
use std::path::Path;

/// Writes a report value as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
