//! GeoNear Geo - Validation, distance, and nearest-neighbor selection
//!
//! This crate turns raw records into validated points, measures great-circle
//! distances between them, and ranks a dataset against a reference location.

pub mod distance;
pub mod selection;
pub mod validation;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use selection::nearest;
pub use validation::{
    validate_dataset, validate_location, validate_point, Rejection, ValidatedDataset,
};
