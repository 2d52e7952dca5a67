use crate::core::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

impl FieldValue {
    pub fn new(name: &str, value: Value) -> Self {
        FieldValue {
            name: name.to_string(),
            value,
        }
    }
}

/// One raw row of the flat sales extract, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field).map(|f| f.value.clone()).unwrap_or(Value::Null)
    }
}
