use serde::Deserialize;
use serde_json::Value;

/// Nearest query request body.
///
/// `location` stays untyped so that a missing or mistyped coordinate is
/// reported by reference validation rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub location: Value,
    pub k: Option<usize>,
}
