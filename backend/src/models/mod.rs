//! Backend row models
//!
//! Re-exports models from the shared crate and adds the raw row shapes of the
//! backend tables and views

pub mod lenient;
mod rows;

pub use rows::*;
pub use shared::models::*;
