use geonear_store::ports::DatasetStore;
use std::sync::Arc;

use crate::config::DatasetSettings;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DatasetStore>,
    pub settings: DatasetSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn DatasetStore>, settings: DatasetSettings) -> Self {
        Self { store, settings }
    }
}
