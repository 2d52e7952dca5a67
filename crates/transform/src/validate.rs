use crate::error::DropReason;
use model::{records::row::RowData, sales::record::SalesRecord};
use std::collections::HashSet;

/// The (order_id, product_id) pairs observed so far in one run.
///
/// Passed explicitly into [`validate`] rather than held as hidden state so
/// that repeated or partitioned runs stay composable. The first occurrence
/// of a key is always the one kept; the set records a key the moment the
/// duplicate check observes it, even if the row is later dropped for
/// another reason.
#[derive(Debug, Default)]
pub struct SeenLineKeys(HashSet<(i64, i64)>);

impl SeenLineKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the key, returning true if it had been seen before.
    fn observe(&mut self, key: (i64, i64)) -> bool {
        !self.0.insert(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Classifies one raw row: either a fully decoded [`SalesRecord`] or the
/// reason it was dropped. Checks run in a fixed order and the first
/// failure wins: duplicate key, then value ranges, then missing required
/// fields.
pub fn validate(row: &RowData, seen: &mut SeenLineKeys) -> Result<SalesRecord, DropReason> {
    let order_id = row.get_value("order_id").as_i64();
    let product_id = row.get_value("product_id").as_i64();

    // If either half of the key is absent no duplicate key can be formed
    // and the row falls through to the missing-field check.
    if let (Some(order), Some(product)) = (order_id, product_id)
        && seen.observe((order, product))
    {
        return Err(DropReason::DuplicateRecord);
    }

    // A null quantity, price, or discount cannot satisfy its range
    // invariant, so it drops here rather than as a missing field.
    let quantity = match row.get_value("quantity").as_i64() {
        Some(q) if q > 0 => q,
        _ => return Err(DropReason::InvalidRange),
    };
    let unit_price = match row.get_value("unit_price").as_f64() {
        Some(p) if p >= 0.0 => p,
        _ => return Err(DropReason::InvalidRange),
    };
    let discount = match row.get_value("discount").as_f64() {
        Some(d) if (0.0..=1.0).contains(&d) => d,
        _ => return Err(DropReason::InvalidRange),
    };

    let order_date = row.get_value("order_date").as_date();
    let required_date = row.get_value("required_date").as_date();
    let shipped_date = row.get_value("shipped_date").as_date();

    // Date ordering is part of the input invariant; a required or shipped
    // date before the order date is an out-of-range value.
    if let (Some(order), Some(required)) = (order_date, required_date)
        && required < order
    {
        return Err(DropReason::InvalidRange);
    }
    if let (Some(order), Some(shipped)) = (order_date, shipped_date)
        && shipped < order
    {
        return Err(DropReason::InvalidRange);
    }

    let (Some(order_id), Some(product_id), Some(order_date)) = (order_id, product_id, order_date)
    else {
        return Err(DropReason::MissingRequiredField);
    };

    Ok(SalesRecord {
        order_id,
        customer_id: row.get_value("customer_id").as_string(),
        product_id,
        category: row.get_value("category").as_string(),
        unit_price,
        quantity,
        discount,
        order_date,
        required_date,
        shipped_date,
    })
}
