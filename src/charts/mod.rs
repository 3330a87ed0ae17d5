//! Charts module - Dashboard panel rendering

mod plotter;

pub use plotter::{ChartPlotter, DashboardData};
