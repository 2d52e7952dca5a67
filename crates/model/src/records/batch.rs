use crate::{records::row::RowData, schema::ColumnMeta};

/// A fully materialized result set from one extraction. The transform
/// never mutates it; the enriched table is built as a new value.
#[derive(Debug, Clone)]
pub struct RecordBatch {
    pub entity: String,
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<RowData>,
}

impl RecordBatch {
    pub fn new(entity: &str, columns: Vec<ColumnMeta>, rows: Vec<RowData>) -> Self {
        RecordBatch {
            entity: entity.to_string(),
            columns,
            rows,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
