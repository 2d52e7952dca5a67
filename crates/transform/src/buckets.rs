/// One tier of a bucket table: values up to and including `upper` take
/// `label`, provided no earlier tier matched first.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub upper: f64,
    pub label: &'static str,
}

/// An ordered, first-match-wins bucket table. Tiers must be listed in
/// ascending `upper` order with an unbounded last tier, which makes the
/// table total and overlap-free for every finite input.
#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    pub name: &'static str,
    pub tiers: &'static [Tier],
}

impl BucketTable {
    pub fn bucket(&self, value: f64) -> &'static str {
        for tier in self.tiers {
            if value <= tier.upper {
                return tier.label;
            }
        }
        self.tiers.last().map_or("", |t| t.label)
    }
}

/// Order size over the net line total (quantity x unit price, after
/// discount). A fully discounted line totals exactly 0 and lands in the
/// first tier.
pub const ORDER_SIZE: BucketTable = BucketTable {
    name: "order_size",
    tiers: &[
        Tier { upper: 100.0, label: "Very Small" },
        Tier { upper: 500.0, label: "Small" },
        Tier { upper: 1000.0, label: "Medium" },
        Tier { upper: 5000.0, label: "Large" },
        Tier { upper: f64::INFINITY, label: "VIP" },
    ],
};

/// Discount magnitude. Validated discounts never exceed 1, so the last
/// tier covers the rest of the domain.
pub const DISCOUNT_LEVEL: BucketTable = BucketTable {
    name: "discount_level",
    tiers: &[
        Tier { upper: 0.0, label: "No Discount" },
        Tier { upper: 0.05, label: "Low" },
        Tier { upper: 0.15, label: "Medium" },
        Tier { upper: 0.25, label: "High" },
        Tier { upper: f64::INFINITY, label: "Very High" },
    ],
};

/// Whole days between order and shipment. Only applied to shipped rows;
/// a null delivery time propagates as null, never as a tier.
pub const DELIVERY_SPEED: BucketTable = BucketTable {
    name: "delivery_speed",
    tiers: &[
        Tier { upper: 3.0, label: "Express" },
        Tier { upper: 7.0, label: "Fast" },
        Tier { upper: 14.0, label: "Normal" },
        Tier { upper: f64::INFINITY, label: "Slow" },
    ],
};
