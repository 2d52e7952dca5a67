use crate::sqlite::error::SqliteError;
use model::{
    core::{data_type::DataType, value::Value},
    records::{
        batch::RecordBatch,
        row::{FieldValue, RowData},
    },
    schema,
};
use rusqlite::{Connection, OpenFlags, types::ValueRef};
use std::path::Path;
use tracing::info;

/// Fixed multi-table join flattening one Northwind order line per row,
/// aliased to the input schema's column names. The ORDER BY pins the row
/// order so duplicate resolution downstream is identical across runs.
const SALES_QUERY: &str = r#"
SELECT
    o.OrderID        AS order_id,
    o.CustomerID     AS customer_id,
    p.ProductID      AS product_id,
    cat.CategoryName AS category,
    od.UnitPrice     AS unit_price,
    od.Quantity      AS quantity,
    od.Discount      AS discount,
    o.OrderDate      AS order_date,
    o.RequiredDate   AS required_date,
    o.ShippedDate    AS shipped_date
FROM Orders o
INNER JOIN "Order Details" od ON o.OrderID = od.OrderID
INNER JOIN Products p         ON od.ProductID = p.ProductID
INNER JOIN Categories cat     ON p.CategoryID = cat.CategoryID
ORDER BY o.OrderDate, o.OrderID, p.ProductID
"#;

/// Extracts the flat sales record set from a Northwind SQLite database.
pub struct SqliteDataSource {
    conn: Connection,
}

impl SqliteDataSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqliteError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SqliteError::NotFound(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(SqliteDataSource { conn })
    }

    /// Materializes the whole join result (or the first `limit` rows) as
    /// one batch. SQLite is dynamically typed and stores Northwind dates
    /// as text, so every cell is re-typed against the declared column
    /// type.
    pub fn extract_sales(&self, limit: Option<usize>) -> Result<RecordBatch, SqliteError> {
        let expected = schema::sales_input();
        let mut stmt = self.conn.prepare(SALES_QUERY)?;

        let mut rows = Vec::new();
        let mut result = stmt.query([])?;
        while let Some(row) = result.next()? {
            if let Some(limit) = limit
                && rows.len() >= limit
            {
                break;
            }
            let mut fields = Vec::with_capacity(expected.columns.len());
            for col in &expected.columns {
                let value = match row.get_ref(col.ordinal) {
                    Ok(ValueRef::Null) | Err(_) => Value::Null,
                    Ok(ValueRef::Integer(n)) => match col.data_type {
                        DataType::Float => Value::Float(n as f64),
                        _ => Value::Int(n),
                    },
                    Ok(ValueRef::Real(f)) => Value::Float(f),
                    Ok(ValueRef::Text(t)) => col.data_type.parse(&String::from_utf8_lossy(t)),
                    Ok(ValueRef::Blob(_)) => Value::Null,
                };
                fields.push(FieldValue::new(&col.name, value));
            }
            rows.push(RowData::new(fields));
        }

        info!("Extracted {} sales rows", rows.len());
        Ok(RecordBatch::new("sales", expected.columns.clone(), rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const NORTHWIND_DDL: &str = r#"
        CREATE TABLE Orders (
            OrderID INTEGER PRIMARY KEY,
            CustomerID TEXT,
            OrderDate TEXT,
            RequiredDate TEXT,
            ShippedDate TEXT
        );
        CREATE TABLE "Order Details" (
            OrderID INTEGER,
            ProductID INTEGER,
            UnitPrice REAL,
            Quantity INTEGER,
            Discount REAL
        );
        CREATE TABLE Products (
            ProductID INTEGER PRIMARY KEY,
            ProductName TEXT,
            CategoryID INTEGER
        );
        CREATE TABLE Categories (
            CategoryID INTEGER PRIMARY KEY,
            CategoryName TEXT
        );
    "#;

    fn seed(conn: &Connection) {
        conn.execute_batch(NORTHWIND_DDL).expect("create schema");
        conn.execute_batch(
            r#"
            INSERT INTO Categories VALUES (1, 'Beverages');
            INSERT INTO Products VALUES (10, 'Chai', 1);
            INSERT INTO Products VALUES (20, 'Chang', 1);
            INSERT INTO Orders VALUES
                (1, 'ALFKI', '2023-01-02 00:00:00', '2023-01-16 00:00:00', '2023-01-09 00:00:00'),
                (2, 'ANATR', '2023-02-01 00:00:00', '2023-02-15 00:00:00', NULL);
            INSERT INTO "Order Details" VALUES
                (1, 10, 10.0, 5, 0.1),
                (1, 20, 4.5, 3, 0),
                (2, 10, 10.0, 2, 0.05);
            "#,
        )
        .expect("seed rows");
    }

    fn sample_db() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("northwind.db");
        let conn = Connection::open(&path).expect("create db");
        seed(&conn);
        drop(conn);
        (dir, path)
    }

    #[test]
    fn extracts_typed_rows_from_the_join() {
        let (_dir, path) = sample_db();
        let batch = SqliteDataSource::open(&path)
            .unwrap()
            .extract_sales(None)
            .unwrap();

        assert_eq!(batch.len(), 3);
        let first = &batch.rows[0];
        assert_eq!(first.get_value("order_id"), Value::Int(1));
        assert_eq!(first.get_value("category"), Value::String("Beverages".into()));
        assert_eq!(first.get_value("unit_price"), Value::Float(10.0));
        assert!(matches!(first.get_value("order_date"), Value::Date(_)));
        // Discount of the second line is stored as integer 0.
        assert_eq!(batch.rows[1].get_value("discount"), Value::Float(0.0));
    }

    #[test]
    fn unshipped_order_extracts_a_null_shipped_date() {
        let (_dir, path) = sample_db();
        let batch = SqliteDataSource::open(&path)
            .unwrap()
            .extract_sales(None)
            .unwrap();
        let unshipped = &batch.rows[2];
        assert_eq!(unshipped.get_value("order_id"), Value::Int(2));
        assert_eq!(unshipped.get_value("shipped_date"), Value::Null);
    }

    #[test]
    fn limit_caps_the_extract() {
        let (_dir, path) = sample_db();
        let batch = SqliteDataSource::open(&path)
            .unwrap()
            .extract_sales(Some(1))
            .unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn missing_database_file_is_reported() {
        assert!(matches!(
            SqliteDataSource::open("/nonexistent/northwind.db"),
            Err(SqliteError::NotFound(_))
        ));
    }
}
