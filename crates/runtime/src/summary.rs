use model::sales::enriched::EnrichedSalesRecord;
use std::collections::{BTreeMap, HashSet};
use transform::buckets::DELIVERY_SPEED;

/// One aggregated view over the enriched table, ready for a CSV sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub name: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Default)]
struct RevenueAcc {
    orders: HashSet<i64>,
    units: i64,
    revenue: f64,
}

impl RevenueAcc {
    fn add(&mut self, row: &EnrichedSalesRecord) {
        self.orders.insert(row.record.order_id);
        self.units += row.record.quantity;
        self.revenue += row.record.net_total();
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.orders.len().to_string(),
            self.units.to_string(),
            format!("{:.2}", self.revenue),
        ]
    }
}

fn revenue_columns(key: &str) -> Vec<String> {
    vec![
        key.to_string(),
        "orders".to_string(),
        "units".to_string(),
        "revenue".to_string(),
    ]
}

/// Net revenue per calendar month, in chronological order.
pub fn revenue_by_month(rows: &[EnrichedSalesRecord]) -> SummaryTable {
    let mut groups: BTreeMap<String, RevenueAcc> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.temporal.year_month.clone())
            .or_default()
            .add(row);
    }

    SummaryTable {
        name: "revenue_by_month",
        columns: revenue_columns("year_month"),
        rows: groups
            .into_iter()
            .map(|(month, acc)| {
                let mut cells = vec![month];
                cells.extend(acc.cells());
                cells
            })
            .collect(),
    }
}

/// Net revenue per product category, highest revenue first. Rows without
/// a category group under "Uncategorized".
pub fn revenue_by_category(rows: &[EnrichedSalesRecord]) -> SummaryTable {
    let mut groups: BTreeMap<String, RevenueAcc> = BTreeMap::new();
    for row in rows {
        let category = row
            .record
            .category
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());
        groups.entry(category).or_default().add(row);
    }

    let mut ranked: Vec<(String, RevenueAcc)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.revenue.total_cmp(&a.1.revenue).then(a.0.cmp(&b.0)));

    SummaryTable {
        name: "revenue_by_category",
        columns: revenue_columns("category"),
        rows: ranked
            .into_iter()
            .map(|(category, acc)| {
                let mut cells = vec![category];
                cells.extend(acc.cells());
                cells
            })
            .collect(),
    }
}

/// Shipment counts and average delivery time per speed tier, in tier
/// order, with unshipped orders counted under their own label.
pub fn delivery_performance(rows: &[EnrichedSalesRecord]) -> SummaryTable {
    #[derive(Default)]
    struct Acc {
        count: u64,
        total_days: i64,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for row in rows {
        let tier = row.business.delivery_speed.unwrap_or("Not Shipped");
        let acc = groups.entry(tier).or_default();
        acc.count += 1;
        acc.total_days += row.business.delivery_days.unwrap_or(0);
    }

    let tier_order = DELIVERY_SPEED
        .tiers
        .iter()
        .map(|t| t.label)
        .chain(std::iter::once("Not Shipped"));

    let mut table_rows = Vec::new();
    for tier in tier_order {
        if let Some(acc) = groups.get(tier) {
            let avg_days = if tier == "Not Shipped" {
                String::new()
            } else {
                format!("{:.1}", acc.total_days as f64 / acc.count as f64)
            };
            table_rows.push(vec![tier.to_string(), acc.count.to_string(), avg_days]);
        }
    }

    SummaryTable {
        name: "delivery_performance",
        columns: vec![
            "delivery_speed".to_string(),
            "order_lines".to_string(),
            "avg_delivery_days".to_string(),
        ],
        rows: table_rows,
    }
}
