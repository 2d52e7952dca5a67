use crate::{
    business,
    error::TransformError,
    report::QualityReport,
    schema, temporal,
    validate::{self, SeenLineKeys},
};
use model::{records::batch::RecordBatch, sales::enriched::EnrichedSalesRecord};
use tracing::info;

/// The enriched table and its quality report, produced together as one
/// atomic result or not at all.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub rows: Vec<EnrichedSalesRecord>,
    pub report: QualityReport,
}

/// Runs the full transform over one extracted batch: structural schema
/// check, then per-row validation followed by temporal and business
/// enrichment. Row drops are counted, never fatal; a broken schema aborts
/// before any row work.
pub fn run(batch: &RecordBatch) -> Result<TransformOutput, TransformError> {
    schema::check(batch)?;

    let mut report = QualityReport::new();
    let mut rows = Vec::with_capacity(batch.len());
    let mut seen = SeenLineKeys::new();

    for raw in &batch.rows {
        report.record_read();
        match validate::validate(raw, &mut seen) {
            Ok(record) => {
                let temporal = temporal::derive(record.order_date);
                let business = business::derive(&record);
                let enriched = EnrichedSalesRecord {
                    record,
                    temporal,
                    business,
                };
                report.record_retained(&enriched);
                rows.push(enriched);
            }
            Err(reason) => report.record_drop(reason),
        }
    }

    info!(
        "Transform completed: {} read, {} retained, {} dropped",
        report.rows_read,
        report.rows_retained,
        report.dropped_total()
    );

    Ok(TransformOutput { rows, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use chrono::NaiveDate;
    use model::{
        core::value::Value,
        records::row::{FieldValue, RowData},
        schema::sales_input,
    };

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sales_row(order_id: i64, product_id: i64, quantity: i64, discount: f64) -> RowData {
        RowData::new(vec![
            FieldValue::new("order_id", Value::Int(order_id)),
            FieldValue::new("customer_id", Value::String("ALFKI".into())),
            FieldValue::new("product_id", Value::Int(product_id)),
            FieldValue::new("category", Value::String("Beverages".into())),
            FieldValue::new("unit_price", Value::Float(10.0)),
            FieldValue::new("quantity", Value::Int(quantity)),
            FieldValue::new("discount", Value::Float(discount)),
            FieldValue::new("order_date", date(2023, 1, 2)),
            FieldValue::new("required_date", date(2023, 1, 16)),
            FieldValue::new("shipped_date", date(2023, 1, 9)),
        ])
    }

    fn sales_batch(rows: Vec<RowData>) -> RecordBatch {
        RecordBatch::new("sales", sales_input().columns, rows)
    }

    #[test]
    fn enriches_the_reference_row() {
        // orderId=1, productId=10, qty=5, price=10.00, discount=0.10,
        // ordered Monday 2023-01-02, shipped 2023-01-09.
        let output = run(&sales_batch(vec![sales_row(1, 10, 5, 0.1)])).unwrap();
        assert_eq!(output.rows.len(), 1);

        let row = &output.rows[0];
        assert!((row.business.revenue_per_unit - 9.0).abs() < 1e-9);
        assert_eq!(row.business.delivery_days, Some(7));
        assert_eq!(row.temporal.day_of_week, 0);
        assert_eq!(row.temporal.month_name, "January");
        assert_eq!(row.temporal.year_month, "2023-01");
        assert!(row.business.has_discount);
    }

    #[test]
    fn duplicate_pair_keeps_only_the_first_row() {
        let output = run(&sales_batch(vec![
            sales_row(2, 20, 5, 0.1),
            sales_row(2, 20, 9, 0.0),
        ]))
        .unwrap();

        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].record.quantity, 5);
        assert_eq!(output.report.dropped_duplicate, 1);
        assert!(output.report.is_balanced());
    }

    #[test]
    fn missing_order_date_drops_without_touching_retained_count() {
        let mut missing = sales_row(3, 30, 5, 0.1);
        missing.field_values[7].value = Value::Null;

        let output = run(&sales_batch(vec![missing])).unwrap();
        assert_eq!(output.rows.len(), 0);
        assert_eq!(output.report.dropped_missing_required_field, 1);
        assert_eq!(output.report.rows_retained, 0);
    }

    #[test]
    fn batch_without_quantity_column_is_fatal() {
        let columns = sales_input()
            .columns
            .into_iter()
            .filter(|c| c.name != "quantity")
            .collect();
        let batch = RecordBatch::new("sales", columns, vec![sales_row(1, 10, 5, 0.1)]);

        let result = run(&batch);
        assert_eq!(
            result.map(|_| ()),
            Err(TransformError::Schema(SchemaError::MissingColumn {
                column: "quantity".into()
            }))
        );
    }

    #[test]
    fn report_accounts_for_every_row_read() {
        let mut missing = sales_row(6, 60, 5, 0.1);
        missing.field_values[0].value = Value::Null;

        let output = run(&sales_batch(vec![
            sales_row(4, 40, 5, 0.1),
            sales_row(4, 40, 5, 0.1), // duplicate
            sales_row(5, 50, 0, 0.1), // invalid quantity
            missing,
        ]))
        .unwrap();

        assert_eq!(output.report.rows_read, 4);
        assert_eq!(output.report.rows_retained, 1);
        assert_eq!(output.report.dropped_duplicate, 1);
        assert_eq!(output.report.dropped_invalid_range, 1);
        assert_eq!(output.report.dropped_missing_required_field, 1);
        assert!(output.report.is_balanced());
    }

    #[test]
    fn null_counts_cover_unshipped_rows() {
        let mut unshipped = sales_row(7, 70, 5, 0.1);
        unshipped.field_values[9].value = Value::Null;

        let output = run(&sales_batch(vec![unshipped])).unwrap();
        assert_eq!(output.report.null_counts.get("shipped_date"), Some(&1));
        assert_eq!(output.report.null_counts.get("delivery_days"), Some(&1));
        assert_eq!(output.report.null_counts.get("delivery_speed"), Some(&1));
        assert_eq!(output.report.null_counts.get("order_id"), None);
    }

    #[test]
    fn shuffled_input_retains_the_same_set_and_counts() {
        let rows = vec![
            sales_row(10, 1, 5, 0.1),
            sales_row(10, 1, 5, 0.1), // duplicate of the first
            sales_row(11, 2, 3, 0.0),
            sales_row(12, 3, 8, 0.25),
            sales_row(12, 3, 8, 0.25), // duplicate
        ];
        let mut shuffled = rows.clone();
        shuffled.reverse();

        let first = run(&sales_batch(rows)).unwrap();
        let second = run(&sales_batch(shuffled)).unwrap();

        let keys = |output: &TransformOutput| {
            let mut keys: Vec<(i64, i64)> =
                output.rows.iter().map(|r| r.record.line_key()).collect();
            keys.sort_unstable();
            keys
        };
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(first.report, second.report);
    }
}
