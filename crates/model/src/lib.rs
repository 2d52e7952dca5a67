pub mod core;
pub mod records;
pub mod sales;
pub mod schema;
