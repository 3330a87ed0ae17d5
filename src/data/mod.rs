//! Data module - CSV loading and date filtering

mod filter;
mod loader;

pub use filter::{arrival_date, filter_by_range, DateRange};
pub use loader::{BookingRecord, DataLoader, LoaderError};
