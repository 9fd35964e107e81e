use serde::{Deserialize, Serialize};

use super::point::{Coordinates, GeoPoint};

/// Number of results returned when a caller does not ask for a specific K
pub const DEFAULT_TOP_K: usize = 10;

/// A dataset point paired with its distance to the query reference.
///
/// `distance_km` is kept at full precision; rounding happens only when the
/// result is turned into a [`NearestMatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub point: GeoPoint,
    pub distance_km: f64,
}

/// Reported form of a ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

impl NearestMatch {
    /// Build the reported form, rounding the distance to two decimals
    pub fn from_ranked(ranked: &RankedResult) -> Self {
        Self {
            id: ranked.point.id().to_string(),
            name: ranked.point.name().to_string(),
            latitude: ranked.point.latitude(),
            longitude: ranked.point.longitude(),
            distance_km: round_km(ranked.distance_km),
        }
    }
}

/// Round a distance to two decimal places for reporting
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
