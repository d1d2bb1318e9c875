//! Data services for the forest fire dashboard

pub mod dashboard;
pub mod index;

pub use dashboard::{CsvRecord, DashboardService};
