//! GeoNear Core - Domain models, error taxonomy, and configuration
//!
//! This crate contains the types shared by the validation, distance, selection
//! and storage layers of the GeoNear system.

pub mod config;
pub mod error;
pub mod models;

pub use error::{GeonearError, Result, ValidationError};
