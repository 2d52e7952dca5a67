pub mod buckets;
pub mod business;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod temporal;
pub mod validate;
