use crate::error::DropReason;
use model::sales::enriched::{EnrichedSalesRecord, OUTPUT_COLUMNS};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts describing one run's data-quality outcome.
///
/// Built up while the pipeline walks the input and frozen once the run
/// finishes; the loader and CLI only read it. For every run,
/// `rows_retained + dropped totals == rows_read`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityReport {
    pub rows_read: u64,
    pub rows_retained: u64,
    pub dropped_duplicate: u64,
    pub dropped_invalid_range: u64,
    pub dropped_missing_required_field: u64,
    /// Null counts per output column over retained rows only. A BTreeMap
    /// keeps the serialized order stable across runs.
    pub null_counts: BTreeMap<String, u64>,
}

impl QualityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_read(&mut self) {
        self.rows_read += 1;
    }

    pub(crate) fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::DuplicateRecord => self.dropped_duplicate += 1,
            DropReason::InvalidRange => self.dropped_invalid_range += 1,
            DropReason::MissingRequiredField => self.dropped_missing_required_field += 1,
        }
    }

    pub(crate) fn record_retained(&mut self, row: &EnrichedSalesRecord) {
        self.rows_retained += 1;
        for (column, value) in OUTPUT_COLUMNS.iter().zip(row.values()) {
            if value.is_null() {
                *self.null_counts.entry((*column).to_string()).or_insert(0) += 1;
            }
        }
    }

    pub fn dropped_total(&self) -> u64 {
        self.dropped_duplicate + self.dropped_invalid_range + self.dropped_missing_required_field
    }

    /// Holds for every completed run; a false here means rows were lost
    /// without being counted.
    pub fn is_balanced(&self) -> bool {
        self.rows_retained + self.dropped_total() == self.rows_read
    }
}
