//! Shared types and models for the forest fire dashboard
//!
//! This crate contains types shared between the backend, the map frontend
//! (via WASM), and other components of the system.

pub mod map;
pub mod models;
pub mod normalization;
pub mod types;

pub use map::*;
pub use models::*;
pub use normalization::*;
pub use types::*;
