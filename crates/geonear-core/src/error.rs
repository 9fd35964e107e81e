//! Error types for GeoNear

use std::path::PathBuf;
use thiserror::Error;

/// Why a single raw record (a dataset entry or a reference location) was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent from the record
    #[error("missing required field `{field}`")]
    Schema { field: &'static str },

    /// A field is present but has the wrong semantic type
    #[error("field `{field}` must be {expected}, found {found}")]
    Type {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A coordinate lies outside its valid bounds
    #[error("{field} {value} is outside the valid range [{min}, {max}]")]
    Range {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The id was already used by an earlier record of the same feed
    #[error("duplicate id `{id}`")]
    DuplicateId { id: String },
}

impl ValidationError {
    /// Short classification label used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Schema { .. } => "schema",
            ValidationError::Type { .. } => "type",
            ValidationError::Range { .. } => "range",
            ValidationError::DuplicateId { .. } => "duplicate",
        }
    }
}

#[derive(Debug, Error)]
pub enum GeonearError {
    // Query errors
    #[error("No geopoints loaded")]
    NoData,

    #[error("Invalid reference location: {0}")]
    InvalidReference(#[source] ValidationError),

    // Dataset errors
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        index: usize,
        #[source]
        reason: ValidationError,
    },

    #[error("Dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Malformed dataset at {path}: {reason}")]
    DatasetFormat { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeonearError>;
