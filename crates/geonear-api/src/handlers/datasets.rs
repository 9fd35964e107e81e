use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::DatasetInfo;
use crate::error::ApiError;
use crate::services::DatasetService;
use crate::state::AppState;

pub async fn get_dataset(State(state): State<Arc<AppState>>) -> Json<DatasetInfo> {
    Json(DatasetInfo::from(&DatasetService::current(&state)))
}

pub async fn reload_dataset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DatasetInfo>, ApiError> {
    tracing::info!(path = %state.settings.data_path.display(), "Reloading dataset");

    let meta = DatasetService::reload(&state).await?;

    tracing::info!(
        points = meta.point_count,
        rejected = meta.rejected_count,
        "Dataset reloaded"
    );
    Ok(Json(DatasetInfo::from(&meta)))
}
