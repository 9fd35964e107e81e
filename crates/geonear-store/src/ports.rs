use geonear_core::models::Dataset;
use std::sync::Arc;

/// Port for the in-memory point collection queried by the nearest pipeline.
///
/// Readers take a snapshot and work on it without further coordination. A
/// snapshot is never affected by a later `replace`: replacement swaps in a
/// new dataset as a whole, it never edits the current one.
pub trait DatasetStore: Send + Sync {
    /// Atomically replace the whole dataset
    fn replace(&self, dataset: Dataset);

    /// Current dataset, shared read-only
    fn snapshot(&self) -> Arc<Dataset>;
}

impl<T: DatasetStore + ?Sized> DatasetStore for Arc<T> {
    fn replace(&self, dataset: Dataset) {
        (**self).replace(dataset)
    }

    fn snapshot(&self) -> Arc<Dataset> {
        (**self).snapshot()
    }
}
