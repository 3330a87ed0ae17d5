//! Stats module - Visitor aggregation

mod aggregator;

pub use aggregator::{Aggregator, VisitorCategory};
