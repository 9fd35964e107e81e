use serde::Serialize;
use std::ops::RangeInclusive;

use crate::error::ValidationError;

/// Valid latitude bounds in degrees
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude bounds in degrees
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Anything that sits at a latitude/longitude pair, in degrees.
pub trait Coordinates {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A named, identified location record held in a dataset.
///
/// Instances only come out of validation, so the coordinates are always
/// finite and within [`LATITUDE_RANGE`] / [`LONGITUDE_RANGE`]. There are no
/// setters: a point never changes once it has been accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, checking the coordinate bounds
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bare position of this point
    pub fn location(&self) -> Location {
        Location { latitude: self.latitude, longitude: self.longitude }
    }
}

impl Coordinates for GeoPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The reference point of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a location, checking the coordinate bounds
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }
}

impl Coordinates for Location {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn check_latitude(value: f64) -> Result<f64, ValidationError> {
    ensure_within(value, &LATITUDE_RANGE, "latitude")
}

fn check_longitude(value: f64) -> Result<f64, ValidationError> {
    ensure_within(value, &LONGITUDE_RANGE, "longitude")
}

// NaN never satisfies `contains`, so non-finite input lands here as well.
fn ensure_within(
    value: f64,
    range: &RangeInclusive<f64>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::Range {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
