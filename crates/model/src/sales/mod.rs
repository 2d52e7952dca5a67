pub mod enriched;
pub mod record;
