mod datasets;
mod nearest;

pub use datasets::DatasetService;
pub use nearest::NearestService;

use crate::error::ApiError;

/// Run file-system work on tokio's blocking pool
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "Blocking task failed");
        ApiError::internal("Internal error").with_details(e.to_string())
    })
}
