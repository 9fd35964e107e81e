//! GeoNear Retrieval - Nearest-point query pipeline
//!
//! This crate implements the `find_nearest` use case on top of a dataset
//! store: reference validation, the empty-dataset gate, selection and
//! reporting precision.

pub mod models;
pub mod pipeline;

pub use models::{NearestQuery, NearestResult};
pub use pipeline::NearestPipeline;
