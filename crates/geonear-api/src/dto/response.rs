use chrono::{DateTime, Utc};
use geonear_core::models::DatasetMeta;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            service: "geonear-api",
        }
    }
}

/// Dataset information response
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub source: String,
    pub point_count: usize,
    pub rejected_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl From<&DatasetMeta> for DatasetInfo {
    fn from(meta: &DatasetMeta) -> Self {
        Self {
            source: meta.source.clone(),
            point_count: meta.point_count,
            rejected_count: meta.rejected_count,
            loaded_at: meta.loaded_at,
        }
    }
}
