use geonear_core::error::{GeonearError, Result};
use geonear_core::models::{GeoPoint, Location, RankedResult};

use crate::distance::distance_km;

/// Rank `points` by distance to `reference` and keep the `k` closest.
///
/// Every point is scored; there is no pruning. The sort is stable, so points
/// at exactly the same distance keep their dataset order. Asking for more
/// results than there are points returns all of them, and `k == 0` returns an
/// empty list. Only an empty `points` slice is an error.
pub fn nearest(reference: &Location, points: &[GeoPoint], k: usize) -> Result<Vec<RankedResult>> {
    if points.is_empty() {
        return Err(GeonearError::NoData);
    }

    let mut ranked: Vec<RankedResult> = points
        .iter()
        .map(|point| RankedResult { point: point.clone(), distance_km: distance_km(reference, point) })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(k);

    Ok(ranked)
}
