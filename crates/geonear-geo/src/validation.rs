use geonear_core::error::{GeonearError, Result, ValidationError};
use geonear_core::models::{Dataset, GeoPoint, Location, ValidationMode};
use serde_json::{Map, Value};
use std::collections::HashSet;

const POINT_FIELDS: [&str; 4] = ["id", "name", "latitude", "longitude"];
const LOCATION_FIELDS: [&str; 2] = ["latitude", "longitude"];

/// A record dropped while validating a dataset feed
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Position of the record in the raw feed
    pub index: usize,
    pub reason: ValidationError,
}

/// Outcome of validating a whole feed
#[derive(Debug, Clone, Default)]
pub struct ValidatedDataset {
    /// Accepted points, in feed order
    pub points: Vec<GeoPoint>,
    /// Records that were skipped (always empty in strict mode)
    pub rejected: Vec<Rejection>,
}

impl ValidatedDataset {
    /// Freeze the accepted points into a dataset
    pub fn into_dataset(self, source: impl Into<String>) -> Dataset {
        let rejected = self.rejected.len();
        Dataset::new(source, self.points, rejected)
    }
}

/// Validate one raw dataset record.
///
/// All four fields must be present before any type is looked at, so a record
/// that is both incomplete and mistyped is reported as a schema problem.
pub fn validate_point(raw: &Value) -> std::result::Result<GeoPoint, ValidationError> {
    let record = as_record(raw)?;
    require_fields(record, &POINT_FIELDS)?;

    let id = id_field(&record["id"])?;
    let name = match &record["name"] {
        Value::String(name) => name.clone(),
        other => {
            return Err(ValidationError::Type {
                field: "name",
                expected: "a string",
                found: json_kind(other),
            })
        }
    };
    let latitude = number_field(record, "latitude")?;
    let longitude = number_field(record, "longitude")?;

    GeoPoint::new(id, name, latitude, longitude)
}

/// Validate a raw reference location
pub fn validate_location(raw: &Value) -> std::result::Result<Location, ValidationError> {
    let record = as_record(raw)?;
    require_fields(record, &LOCATION_FIELDS)?;

    let latitude = number_field(record, "latitude")?;
    let longitude = number_field(record, "longitude")?;

    Location::new(latitude, longitude)
}

/// Validate a whole feed of raw records.
///
/// In [`ValidationMode::Lenient`] an invalid record is logged and skipped and
/// the remaining records are still processed; an empty or fully invalid feed
/// is returned as an empty result, not an error. In [`ValidationMode::Strict`]
/// the first invalid record fails the whole feed.
///
/// Ids are unique within the result: a repeated id is rejected like any other
/// invalid record and the first occurrence is kept.
pub fn validate_dataset(records: &[Value], mode: ValidationMode) -> Result<ValidatedDataset> {
    let mut validated = ValidatedDataset::default();
    let mut seen_ids = HashSet::new();

    for (index, raw) in records.iter().enumerate() {
        let outcome = validate_point(raw).and_then(|point| {
            if seen_ids.insert(point.id().to_string()) {
                Ok(point)
            } else {
                Err(ValidationError::DuplicateId { id: point.id().to_string() })
            }
        });

        match outcome {
            Ok(point) => validated.points.push(point),
            Err(reason) => match mode {
                ValidationMode::Strict => {
                    return Err(GeonearError::InvalidRecord { index, reason });
                }
                ValidationMode::Lenient => {
                    tracing::warn!(
                        index,
                        kind = reason.kind(),
                        reason = %reason,
                        "Skipping invalid geopoint record"
                    );
                    validated.rejected.push(Rejection { index, reason });
                }
            },
        }
    }

    Ok(validated)
}

fn as_record(raw: &Value) -> std::result::Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or(ValidationError::Type {
        field: "record",
        expected: "an object",
        found: json_kind(raw),
    })
}

fn require_fields(
    record: &Map<String, Value>,
    fields: &[&'static str],
) -> std::result::Result<(), ValidationError> {
    match fields.iter().find(|field| !record.contains_key(**field)) {
        Some(field) => Err(ValidationError::Schema { field: *field }),
        None => Ok(()),
    }
}

fn id_field(value: &Value) -> std::result::Result<String, ValidationError> {
    match value {
        Value::String(id) => Ok(id.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(ValidationError::Type {
            field: "id",
            expected: "a string or integer",
            found: json_kind(other),
        }),
    }
}

fn number_field(
    record: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<f64, ValidationError> {
    let value = &record[field];
    value.as_f64().ok_or(ValidationError::Type {
        field,
        expected: "a number",
        found: json_kind(value),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonear_core::models::Coordinates;
    use serde_json::json;

    #[test]
    fn test_valid_point() {
        let point =
            validate_point(&json!({"id": "A", "name": "Alpha", "latitude": 1.5, "longitude": -2}))
                .unwrap();

        assert_eq!(point.id(), "A");
        assert_eq!(point.name(), "Alpha");
        assert_eq!(point.latitude(), 1.5);
        assert_eq!(point.longitude(), -2.0);
    }

    #[test]
    fn test_integer_id_is_normalized() {
        let point =
            validate_point(&json!({"id": 42, "name": "Answer", "latitude": 0, "longitude": 0}))
                .unwrap();
        assert_eq!(point.id(), "42");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let point = validate_point(&json!({
            "id": "A", "name": "Alpha", "latitude": 0, "longitude": 0, "category": "cafe"
        }));
        assert!(point.is_ok());
    }

    #[test]
    fn test_missing_field_is_schema_error() {
        let err = validate_point(&json!({"id": "A", "name": "Alpha", "longitude": 0})).unwrap_err();
        assert_eq!(err, ValidationError::Schema { field: "latitude" });
    }

    #[test]
    fn test_schema_checked_before_types() {
        let err = validate_point(&json!({"name": "Alpha", "latitude": "north", "longitude": 0}))
            .unwrap_err();
        assert_eq!(err, ValidationError::Schema { field: "id" });
    }

    #[test]
    fn test_numeric_string_is_type_error() {
        let err =
            validate_point(&json!({"id": "A", "name": "Alpha", "latitude": "45.0", "longitude": 0}))
                .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Type { field: "latitude", expected: "a number", found: "a string" }
        );
    }

    #[test]
    fn test_boolean_and_null_coordinates_are_type_errors() {
        let err =
            validate_point(&json!({"id": "A", "name": "Alpha", "latitude": 0, "longitude": true}))
                .unwrap_err();
        assert!(matches!(err, ValidationError::Type { field: "longitude", found: "a boolean", .. }));

        let err = validate_location(&json!({"latitude": null, "longitude": 0})).unwrap_err();
        assert!(matches!(err, ValidationError::Type { field: "latitude", found: "null", .. }));
    }

    #[test]
    fn test_bad_id_and_name_types() {
        let err =
            validate_point(&json!({"id": 1.5, "name": "Alpha", "latitude": 0, "longitude": 0}))
                .unwrap_err();
        assert!(matches!(err, ValidationError::Type { field: "id", .. }));

        let err = validate_point(&json!({"id": "A", "name": 7, "latitude": 0, "longitude": 0}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Type { field: "name", .. }));
    }

    #[test]
    fn test_out_of_range_is_range_error() {
        let err =
            validate_point(&json!({"id": "A", "name": "Alpha", "latitude": 95, "longitude": 0}))
                .unwrap_err();
        assert!(matches!(err, ValidationError::Range { field: "latitude", .. }));
    }

    #[test]
    fn test_non_object_record() {
        let err = validate_point(&json!(["A", "Alpha", 0, 0])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Type { field: "record", expected: "an object", found: "an array" }
        );
    }

    #[test]
    fn test_location_only_needs_coordinates() {
        let location = validate_location(&json!({"latitude": 52.52, "longitude": 13.405})).unwrap();
        assert_eq!(location.latitude(), 52.52);

        let err = validate_location(&json!({"latitude": 52.52})).unwrap_err();
        assert_eq!(err, ValidationError::Schema { field: "longitude" });
    }

    #[test]
    fn test_lenient_dataset_skips_invalid_records() {
        let records = vec![
            json!({"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0}),
            json!({"id": "B", "name": "Beta", "longitude": 1}),
            json!({"id": "C", "name": "Gamma", "latitude": 10, "longitude": 10}),
        ];

        let validated = validate_dataset(&records, ValidationMode::Lenient).unwrap();

        let ids: Vec<&str> = validated.points.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(
            validated.rejected,
            vec![Rejection { index: 1, reason: ValidationError::Schema { field: "latitude" } }]
        );
    }

    #[test]
    fn test_strict_dataset_fails_on_first_invalid_record() {
        let records = vec![
            json!({"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0}),
            json!({"id": "B", "name": "Beta", "latitude": "0", "longitude": 1}),
            json!({"id": "C", "name": "Gamma"}),
        ];

        let err = validate_dataset(&records, ValidationMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            GeonearError::InvalidRecord { index: 1, reason: ValidationError::Type { .. } }
        ));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let records = vec![
            json!({"id": "A", "name": "First", "latitude": 0, "longitude": 0}),
            json!({"id": "A", "name": "Second", "latitude": 1, "longitude": 1}),
        ];

        let validated = validate_dataset(&records, ValidationMode::Lenient).unwrap();
        assert_eq!(validated.points.len(), 1);
        assert_eq!(validated.points[0].name(), "First");
        assert_eq!(validated.rejected[0].reason, ValidationError::DuplicateId { id: "A".into() });
    }

    #[test]
    fn test_empty_and_all_invalid_feeds_are_not_errors() {
        let empty = validate_dataset(&[], ValidationMode::Lenient).unwrap();
        assert!(empty.points.is_empty());

        let all_invalid =
            validate_dataset(&[json!(null), json!({"id": "A"})], ValidationMode::Lenient).unwrap();
        assert!(all_invalid.points.is_empty());
        assert_eq!(all_invalid.rejected.len(), 2);

        let dataset = all_invalid.into_dataset("feed");
        assert!(dataset.is_empty());
        assert_eq!(dataset.meta().rejected_count, 2);
    }
}
