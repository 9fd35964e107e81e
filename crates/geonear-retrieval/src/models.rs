use geonear_core::models::{NearestMatch, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A nearest-point query as received from a boundary.
///
/// The reference is kept raw; the pipeline validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestQuery {
    pub reference: Value,
    pub top_k: usize,
}

impl NearestQuery {
    /// Create a query with the default `top_k`
    pub fn new(reference: Value) -> Self {
        Self { reference, top_k: DEFAULT_TOP_K }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Result of a nearest-point query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestResult {
    /// Matches ordered by ascending distance
    pub matches: Vec<NearestMatch>,

    /// Number of points scored
    pub points_evaluated: usize,
}
