//! HTTP handlers

pub mod dashboard;
pub mod health;
pub mod reporting;

pub use dashboard::*;
pub use health::*;
pub use reporting::*;
