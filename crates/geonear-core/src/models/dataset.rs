use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::point::GeoPoint;

/// How a dataset feed reacts to an invalid record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Skip the record, log it, keep going
    #[default]
    Lenient,
    /// Reject the whole feed
    Strict,
}

/// Dataset metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Where the points came from (file path or a caller-supplied label)
    pub source: String,

    /// Number of accepted points
    pub point_count: usize,

    /// Number of records dropped during validation
    pub rejected_count: usize,

    /// When the dataset was built
    pub loaded_at: DateTime<Utc>,
}

/// An ordered, immutable collection of validated points.
///
/// Insertion order from the source feed is preserved; it is what breaks
/// distance ties during selection. A reload builds a new `Dataset` rather
/// than editing this one.
#[derive(Debug, Clone)]
pub struct Dataset {
    meta: DatasetMeta,
    points: Vec<GeoPoint>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, points: Vec<GeoPoint>, rejected_count: usize) -> Self {
        Self {
            meta: DatasetMeta {
                source: source.into(),
                point_count: points.len(),
                rejected_count,
                loaded_at: Utc::now(),
            },
            points,
        }
    }

    /// A dataset with no points, used before the first successful load
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(source, Vec::new(), 0)
    }

    pub fn meta(&self) -> &DatasetMeta {
        &self.meta
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
