use crate::{core::value::Value, sales::record::SalesRecord};
use serde::Serialize;

/// The eight calendar columns, all pure functions of the order date.
/// Week numbering is ISO-8601 and days run Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemporalFeatures {
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
    pub day_of_week: u32,
    pub week_of_year: u32,
    pub month_name: &'static str,
    /// "YYYY-MM", a ready-made monthly grouping key.
    pub year_month: String,
    pub day_name: &'static str,
}

/// The six business columns. `delivery_days` and `delivery_speed` are null
/// for orders that have not shipped yet; that is data, not an error.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BusinessFeatures {
    pub order_size: &'static str,
    pub has_discount: bool,
    pub discount_level: &'static str,
    pub delivery_days: Option<i64>,
    pub delivery_speed: Option<&'static str>,
    pub revenue_per_unit: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedSalesRecord {
    #[serde(flatten)]
    pub record: SalesRecord,
    #[serde(flatten)]
    pub temporal: TemporalFeatures,
    #[serde(flatten)]
    pub business: BusinessFeatures,
}

/// Stable output column order: the ten source columns followed by the
/// fourteen derived ones.
pub const OUTPUT_COLUMNS: [&str; 24] = [
    "order_id",
    "customer_id",
    "product_id",
    "category",
    "unit_price",
    "quantity",
    "discount",
    "order_date",
    "required_date",
    "shipped_date",
    "year",
    "month",
    "quarter",
    "day_of_week",
    "week_of_year",
    "month_name",
    "year_month",
    "day_name",
    "order_size",
    "has_discount",
    "discount_level",
    "delivery_days",
    "delivery_speed",
    "revenue_per_unit",
];

impl EnrichedSalesRecord {
    /// Cell values in `OUTPUT_COLUMNS` order.
    pub fn values(&self) -> Vec<Value> {
        let r = &self.record;
        let t = &self.temporal;
        let b = &self.business;
        vec![
            Value::Int(r.order_id),
            r.customer_id.clone().map(Value::String).unwrap_or(Value::Null),
            Value::Int(r.product_id),
            r.category.clone().map(Value::String).unwrap_or(Value::Null),
            Value::Float(r.unit_price),
            Value::Int(r.quantity),
            Value::Float(r.discount),
            Value::Date(r.order_date),
            r.required_date.map(Value::Date).unwrap_or(Value::Null),
            r.shipped_date.map(Value::Date).unwrap_or(Value::Null),
            Value::Int(t.year as i64),
            Value::Int(t.month as i64),
            Value::Int(t.quarter as i64),
            Value::Int(t.day_of_week as i64),
            Value::Int(t.week_of_year as i64),
            Value::String(t.month_name.to_string()),
            Value::String(t.year_month.clone()),
            Value::String(t.day_name.to_string()),
            Value::String(b.order_size.to_string()),
            Value::Boolean(b.has_discount),
            Value::String(b.discount_level.to_string()),
            b.delivery_days.map(Value::Int).unwrap_or(Value::Null),
            b.delivery_speed
                .map(|s| Value::String(s.to_string()))
                .unwrap_or(Value::Null),
            Value::Float(b.revenue_per_unit),
        ]
    }
}
