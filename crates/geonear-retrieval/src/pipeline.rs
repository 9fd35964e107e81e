use geonear_core::error::{GeonearError, Result};
use geonear_core::models::{Coordinates, NearestMatch};
use geonear_geo::{nearest, validate_location};
use geonear_store::ports::DatasetStore;
use serde_json::Value;

use crate::models::{NearestQuery, NearestResult};

/// Query pipeline answering nearest-point requests against a dataset store
pub struct NearestPipeline<S: DatasetStore> {
    store: S,
}

impl<S: DatasetStore> NearestPipeline<S> {
    /// Create a new pipeline over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute a query
    pub fn execute(&self, query: &NearestQuery) -> Result<NearestResult> {
        self.find_nearest(&query.reference, query.top_k)
    }

    /// Find the `k` points closest to a raw reference location.
    ///
    /// The query runs against one snapshot of the store, so a concurrent
    /// reload never mixes two datasets in a single answer. An empty snapshot
    /// fails with [`GeonearError::NoData`] before the reference is looked at;
    /// a reference that fails validation fails with
    /// [`GeonearError::InvalidReference`]. Distances are rounded to two
    /// decimals only after ranking.
    pub fn find_nearest(&self, reference_raw: &Value, k: usize) -> Result<NearestResult> {
        let snapshot = self.store.snapshot();
        if snapshot.is_empty() {
            return Err(GeonearError::NoData);
        }

        let reference = validate_location(reference_raw).map_err(GeonearError::InvalidReference)?;

        let ranked = nearest(&reference, snapshot.points(), k)?;
        tracing::debug!(
            latitude = reference.latitude(),
            longitude = reference.longitude(),
            k,
            evaluated = snapshot.len(),
            returned = ranked.len(),
            "Nearest query complete"
        );

        Ok(NearestResult {
            matches: ranked.iter().map(NearestMatch::from_ranked).collect(),
            points_evaluated: snapshot.len(),
        })
    }
}
