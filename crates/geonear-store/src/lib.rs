//! GeoNear Store - Dataset storage port and adapters
//!
//! This crate defines the dataset store port, an in-memory adapter with
//! atomic wholesale replacement, and the JSON file loader that feeds it.

pub mod loader;
pub mod memory;
pub mod ports;
