//! JSON file loading for datasets and reference locations.

use geonear_core::error::{GeonearError, Result};
use geonear_core::models::{DatasetMeta, ValidationMode};
use geonear_geo::{validate_dataset, ValidatedDataset};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::ports::DatasetStore;

/// Read a dataset file and validate every record in it.
///
/// The file must hold a JSON array of point records. A missing file is
/// [`GeonearError::DatasetNotFound`]; unparsable JSON or a non-array top level
/// is [`GeonearError::DatasetFormat`]. Per-record problems follow `mode`.
pub fn load_dataset(path: &Path, mode: ValidationMode) -> Result<ValidatedDataset> {
    let raw = read_json(path)?;

    let records = match raw {
        Value::Array(records) => records,
        other => {
            return Err(GeonearError::DatasetFormat {
                path: path.to_path_buf(),
                reason: format!("expected a JSON array of records, found {}", top_level_kind(&other)),
            })
        }
    };

    let validated = validate_dataset(&records, mode)?;
    tracing::info!(
        path = %path.display(),
        accepted = validated.points.len(),
        rejected = validated.rejected.len(),
        "Loaded dataset"
    );

    Ok(validated)
}

/// Load `path` and swap it into `store`, returning the new dataset metadata.
///
/// On any error the store keeps its current dataset.
pub fn reload_into(store: &dyn DatasetStore, path: &Path, mode: ValidationMode) -> Result<DatasetMeta> {
    let dataset = load_dataset(path, mode)?.into_dataset(path.display().to_string());
    let meta = dataset.meta().clone();
    store.replace(dataset);
    Ok(meta)
}

/// Read a raw reference location from a JSON file.
///
/// Only the file itself is checked here; the coordinates are validated when
/// the location is used in a query.
pub fn load_location(path: &Path) -> Result<Value> {
    read_json(path)
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GeonearError::DatasetNotFound { path: path.to_path_buf() },
        _ => GeonearError::Io(e),
    })?;

    serde_json::from_str(&contents).map_err(|e| GeonearError::DatasetFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn top_level_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Array(_) => "an array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDatasetStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_dataset() {
        let file = json_file(
            r#"[
                {"id": "A", "name": "Alpha", "latitude": 0.0, "longitude": 0.0},
                {"id": "B", "name": "Beta", "latitude": 0.0, "longitude": 1.0}
            ]"#,
        );

        let validated = load_dataset(file.path(), ValidationMode::Lenient).unwrap();
        assert_eq!(validated.points.len(), 2);
        assert!(validated.rejected.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("nope.json"), ValidationMode::Lenient).unwrap_err();
        assert!(matches!(err, GeonearError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let file = json_file("[{\"id\": \"A\",");
        let err = load_dataset(file.path(), ValidationMode::Lenient).unwrap_err();
        assert!(matches!(err, GeonearError::DatasetFormat { .. }));
    }

    #[test]
    fn test_non_array_is_format_error() {
        let file = json_file(r#"{"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0}"#);
        let err = load_dataset(file.path(), ValidationMode::Lenient).unwrap_err();
        match err {
            GeonearError::DatasetFormat { reason, .. } => assert!(reason.contains("an object")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reload_keeps_old_dataset_on_failure() {
        let good = json_file(r#"[{"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0}]"#);
        let bad = json_file(r#"[{"id": "A", "name": "Alpha", "latitude": "0", "longitude": 0}]"#);
        let store = MemoryDatasetStore::new();

        let meta = reload_into(&store, good.path(), ValidationMode::Strict).unwrap();
        assert_eq!(meta.point_count, 1);

        let err = reload_into(&store, bad.path(), ValidationMode::Strict).unwrap_err();
        assert!(matches!(err, GeonearError::InvalidRecord { index: 0, .. }));
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_lenient_reload_records_rejections() {
        let file = json_file(
            r#"[
                {"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0},
                {"id": "B", "name": "Beta", "latitude": 91, "longitude": 0}
            ]"#,
        );
        let store = MemoryDatasetStore::new();

        let meta = reload_into(&store, file.path(), ValidationMode::Lenient).unwrap();
        assert_eq!(meta.point_count, 1);
        assert_eq!(meta.rejected_count, 1);
        assert_eq!(meta.source, file.path().display().to_string());
    }

    #[test]
    fn test_load_location_returns_raw_value() {
        let file = json_file(r#"{"latitude": 52.52, "longitude": 13.405}"#);
        let raw = load_location(file.path()).unwrap();
        assert_eq!(raw["latitude"], 52.52);
    }
}
