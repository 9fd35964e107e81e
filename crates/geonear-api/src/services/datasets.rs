use geonear_core::models::DatasetMeta;
use geonear_store::loader::reload_into;

use crate::error::ApiError;
use crate::services::blocking;
use crate::state::AppState;

/// Service for dataset inspection and reload
pub struct DatasetService;

impl DatasetService {
    /// Metadata of the dataset currently served
    pub fn current(state: &AppState) -> DatasetMeta {
        state.store.snapshot().meta().clone()
    }

    /// Re-read the configured data file and swap it in.
    ///
    /// A failed reload leaves the current dataset in place.
    pub async fn reload(state: &AppState) -> Result<DatasetMeta, ApiError> {
        let store = state.store.clone();
        let settings = state.settings.clone();

        let reloaded =
            blocking(move || reload_into(store.as_ref(), &settings.data_path, settings.validation_mode))
                .await?;

        reloaded.map_err(|e| {
            tracing::error!(
                path = %state.settings.data_path.display(),
                error = %e,
                "Dataset reload failed, keeping current dataset"
            );
            ApiError::internal("Dataset reload failed").with_details(e.to_string())
        })
    }
}
