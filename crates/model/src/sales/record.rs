use chrono::NaiveDate;
use serde::Serialize;

/// One validated order line from the flat sales extract.
///
/// Invariants guaranteed by validation: `unit_price >= 0`, `quantity > 0`,
/// `discount` in `[0, 1]`, `order_date <= required_date` and
/// `shipped_date >= order_date` where those dates are present.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesRecord {
    pub order_id: i64,
    pub customer_id: Option<String>,
    pub product_id: i64,
    pub category: Option<String>,
    pub unit_price: f64,
    pub quantity: i64,
    pub discount: f64,
    pub order_date: NaiveDate,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
}

impl SalesRecord {
    /// Net value of the line after discount.
    pub fn net_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price * (1.0 - self.discount)
    }

    /// Duplicate-detection key: at most one row per (order, product) pair
    /// survives a run.
    pub fn line_key(&self) -> (i64, i64) {
        (self.order_id, self.product_id)
    }
}
