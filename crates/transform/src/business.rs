use crate::buckets::{DELIVERY_SPEED, DISCOUNT_LEVEL, ORDER_SIZE};
use model::sales::{enriched::BusinessFeatures, record::SalesRecord};

/// Derives the six business columns from one validated record.
///
/// Unshipped orders keep `delivery_days` and `delivery_speed` null; the
/// null propagates instead of defaulting into a tier.
pub fn derive(record: &SalesRecord) -> BusinessFeatures {
    let delivery_days = record
        .shipped_date
        .map(|shipped| (shipped - record.order_date).num_days());

    BusinessFeatures {
        order_size: ORDER_SIZE.bucket(record.net_total()),
        has_discount: record.discount > 0.0,
        discount_level: DISCOUNT_LEVEL.bucket(record.discount),
        delivery_days,
        delivery_speed: delivery_days.map(|days| DELIVERY_SPEED.bucket(days as f64)),
        revenue_per_unit: record.unit_price * (1.0 - record.discount),
    }
}
