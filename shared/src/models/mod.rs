//! Domain models for the forest fire dashboard

mod business;
mod danger;
mod district;
mod reports;

pub use business::*;
pub use danger::*;
pub use district::*;
pub use reports::*;
