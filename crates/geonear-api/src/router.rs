use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Queries
        .route("/api/v1/nearest", post(handlers::handle_nearest))
        .route("/nearest_geopoints_from_file/", get(handlers::nearest_from_file))

        // Datasets
        .route("/api/v1/datasets", get(handlers::get_dataset))
        .route("/api/v1/datasets/reload", post(handlers::reload_dataset))

        .with_state(state)
}
