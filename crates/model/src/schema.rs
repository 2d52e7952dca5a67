use crate::core::data_type::DataType;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnMeta {
    pub name: String,
    pub data_type: DataType,
    /// Required columns must be non-null in every retained row; a null
    /// here drops the row as `MissingRequiredField`.
    pub required: bool,
    pub ordinal: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub entity: String,
    pub columns: Vec<ColumnMeta>,
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Expected shape of the flat sales extract, one row per order line.
/// Column names and types are fixed; the transform rejects the whole run
/// if any of them is missing or mis-typed.
pub fn sales_input() -> TableSchema {
    let columns = [
        ("order_id", DataType::Int, true),
        ("customer_id", DataType::String, false),
        ("product_id", DataType::Int, true),
        ("category", DataType::String, false),
        ("unit_price", DataType::Float, false),
        ("quantity", DataType::Int, false),
        ("discount", DataType::Float, false),
        ("order_date", DataType::Date, true),
        ("required_date", DataType::Date, false),
        ("shipped_date", DataType::Date, false),
    ];

    TableSchema {
        entity: "sales".to_string(),
        columns: columns
            .into_iter()
            .enumerate()
            .map(|(ordinal, (name, data_type, required))| ColumnMeta {
                name: name.to_string(),
                data_type,
                required,
                ordinal,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_input_shape() {
        let schema = sales_input();
        assert_eq!(schema.columns.len(), 10);
        assert_eq!(schema.column("ORDER_DATE").map(|c| c.data_type), Some(DataType::Date));

        let required: Vec<&str> = schema
            .columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(required, vec!["order_id", "product_id", "order_date"]);
    }
}
