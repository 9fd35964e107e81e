use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use geonear_core::models::NearestMatch;
use geonear_retrieval::NearestQuery;

use crate::dto::NearestRequest;
use crate::error::ApiError;
use crate::services::NearestService;
use crate::state::AppState;

pub async fn handle_nearest(
    State(state): State<Arc<AppState>>,
    request: Result<Json<NearestRequest>, JsonRejection>,
) -> Result<Json<Vec<NearestMatch>>, ApiError> {
    let Json(request) = request.map_err(|rejection| {
        ApiError::bad_request("Invalid request body").with_details(rejection.body_text())
    })?;
    let k = request.k.unwrap_or(state.settings.top_k);

    tracing::info!(k, "Processing nearest request");

    let query = NearestQuery::new(request.location).with_top_k(k);
    let matches = NearestService::execute(&state, &query)?;
    Ok(Json(matches))
}

pub async fn nearest_from_file(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NearestMatch>>, ApiError> {
    tracing::info!(
        location_path = %state.settings.location_path.display(),
        "Processing nearest request from file"
    );

    let matches = NearestService::execute_from_file(&state).await?;
    Ok(Json(matches))
}
