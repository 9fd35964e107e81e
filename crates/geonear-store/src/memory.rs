//! In-memory dataset storage.
//!
//! The current dataset sits behind an `Arc` that is swapped under a short
//! write lock. Readers clone the `Arc` and drop the lock immediately, so a
//! query never holds the lock while it computes distances.

use geonear_core::models::Dataset;
use std::sync::{Arc, PoisonError, RwLock};

use crate::ports::DatasetStore;

/// In-memory implementation of DatasetStore
#[derive(Debug)]
pub struct MemoryDatasetStore {
    current: RwLock<Arc<Dataset>>,
}

impl MemoryDatasetStore {
    /// Create a store holding an empty dataset
    pub fn new() -> Self {
        Self::with_dataset(Dataset::empty("empty"))
    }

    /// Create a store seeded with `dataset`
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { current: RwLock::new(Arc::new(dataset)) }
    }
}

impl Default for MemoryDatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStore for MemoryDatasetStore {
    fn replace(&self, dataset: Dataset) {
        let fresh = Arc::new(dataset);
        // The lock only guards a pointer swap, so a poisoned lock still holds a whole dataset.
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = fresh;
    }

    fn snapshot(&self) -> Arc<Dataset> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
