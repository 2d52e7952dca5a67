use crate::core::value::Value;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Float,
    String,
    Boolean,
    Date,
}

impl DataType {
    /// Parses a raw text cell into a typed value. Empty and unparseable
    /// cells both read as null; per-row validation decides whether a null
    /// is acceptable for the column.
    pub fn parse(&self, cell: &str) -> Value {
        let cell = cell.trim();
        if cell.is_empty() {
            return Value::Null;
        }
        match self {
            DataType::Int => cell.parse::<i64>().map(Value::Int).unwrap_or(Value::Null),
            DataType::Float => cell.parse::<f64>().map(Value::Float).unwrap_or(Value::Null),
            DataType::String => Value::String(cell.to_string()),
            DataType::Boolean => match cell.to_lowercase().as_str() {
                "true" | "1" => Value::Boolean(true),
                "false" | "0" => Value::Boolean(false),
                _ => Value::Null,
            },
            DataType::Date => parse_date(cell).map(Value::Date).unwrap_or(Value::Null),
        }
    }
}

/// Accepts bare ISO dates as well as datetime strings with a trailing time
/// component ("1997-08-25 00:00:00"), which is how Northwind dumps store
/// their dates.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
