use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use geonear_core::models::Dataset;
use geonear_store::loader::load_dataset;
use geonear_store::memory::MemoryDatasetStore;
use geonear_store::ports::DatasetStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geonear_api::{create_router, ApiConfig, AppState, DatasetSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geonear_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        data_path = %config.dataset.data_path.display(),
        top_k = config.dataset.top_k,
        validation_mode = ?config.dataset.validation_mode,
        "Starting GeoNear API server"
    );

    let store: Arc<dyn DatasetStore> = Arc::new(initial_store(&config.dataset));
    let state = Arc::new(AppState::new(store, config.dataset.clone()));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Load the startup dataset, falling back to an empty one so the server still comes up
fn initial_store(settings: &DatasetSettings) -> MemoryDatasetStore {
    match load_dataset(&settings.data_path, settings.validation_mode) {
        Ok(validated) => {
            let dataset = validated.into_dataset(settings.data_path.display().to_string());
            tracing::info!(points = dataset.len(), "Successfully loaded geopoints");
            MemoryDatasetStore::with_dataset(dataset)
        }
        Err(e) => {
            tracing::error!(
                path = %settings.data_path.display(),
                error = %e,
                "No geopoints loaded, queries will report no data until a reload succeeds"
            );
            MemoryDatasetStore::with_dataset(Dataset::empty(settings.data_path.display().to_string()))
        }
    }
}
