use geonear_core::models::NearestMatch;
use geonear_retrieval::{NearestPipeline, NearestQuery};
use geonear_store::loader::load_location;

use crate::error::ApiError;
use crate::services::blocking;
use crate::state::AppState;

/// Service for executing nearest queries
pub struct NearestService;

impl NearestService {
    /// Run a nearest query against the current dataset snapshot
    pub fn execute(state: &AppState, query: &NearestQuery) -> Result<Vec<NearestMatch>, ApiError> {
        let pipeline = NearestPipeline::new(state.store.clone());

        let result = pipeline.execute(query).map_err(|e| {
            tracing::warn!(error = %e, "Nearest query failed");
            ApiError::from(e)
        })?;

        tracing::info!(
            evaluated = result.points_evaluated,
            returned = result.matches.len(),
            "Nearest query served"
        );
        Ok(result.matches)
    }

    /// Answer a query for the reference location stored in the configured file.
    ///
    /// The file is read on every call so edits are picked up without a restart.
    pub async fn execute_from_file(state: &AppState) -> Result<Vec<NearestMatch>, ApiError> {
        let path = state.settings.location_path.clone();

        let loaded = blocking({
            let path = path.clone();
            move || load_location(&path)
        })
        .await?;

        let reference = loaded.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to load reference location");
            ApiError::internal(format!("Error loading reference location from {}", path.display()))
                .with_details(e.to_string())
        })?;

        Self::execute(state, &NearestQuery::new(reference).with_top_k(state.settings.top_k))
    }
}
