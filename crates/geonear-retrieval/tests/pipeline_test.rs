//! End-to-end pipeline behavior over the file loader and memory store

use geonear_core::error::GeonearError;
use geonear_core::models::ValidationMode;
use geonear_retrieval::{NearestPipeline, NearestQuery};
use geonear_store::loader::reload_into;
use geonear_store::memory::MemoryDatasetStore;
use geonear_store::ports::DatasetStore;
use proptest::prelude::*;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;

fn feed(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_invalid_records_do_not_abort_loading() {
    let file = feed(
        r#"[
            {"id": "A", "name": "Alpha", "latitude": 0, "longitude": 0},
            {"id": "B", "name": "Beta", "longitude": 1},
            {"id": "C", "name": "Gamma", "latitude": 10, "longitude": 10}
        ]"#,
    );
    let store = Arc::new(MemoryDatasetStore::new());
    reload_into(store.as_ref(), file.path(), ValidationMode::Lenient).unwrap();

    let pipeline = NearestPipeline::new(Arc::clone(&store));
    let result = pipeline.find_nearest(&json!({"latitude": 0, "longitude": 0}), 10).unwrap();

    let ids: Vec<&str> = result.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);
    assert_eq!(store.snapshot().meta().rejected_count, 1);
}

#[test]
fn test_fully_invalid_feed_yields_no_data() {
    let file = feed(r#"[{"id": "A"}, {"name": "nameless", "latitude": 0, "longitude": 0}]"#);
    let store = Arc::new(MemoryDatasetStore::new());
    reload_into(store.as_ref(), file.path(), ValidationMode::Lenient).unwrap();

    let pipeline = NearestPipeline::new(store);
    let err = pipeline.find_nearest(&json!({"latitude": 0, "longitude": 0}), 10).unwrap_err();
    assert!(matches!(err, GeonearError::NoData));
}

fn dataset_feed() -> impl Strategy<Value = Vec<serde_json::Value>> {
    prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..25).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| json!({"id": i, "name": format!("p{i}"), "latitude": lat, "longitude": lon}))
            .collect()
    })
}

proptest! {
    #[test]
    fn reported_matches_are_bounded_and_rounded(
        records in dataset_feed(),
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        k in 0usize..30,
    ) {
        let file = feed(&serde_json::to_string(&records).unwrap());
        let store = MemoryDatasetStore::new();
        reload_into(&store, file.path(), ValidationMode::Strict).unwrap();

        let pipeline = NearestPipeline::new(store);
        let query = NearestQuery::new(json!({"latitude": lat, "longitude": lon})).with_top_k(k);
        let result = pipeline.execute(&query).unwrap();

        prop_assert_eq!(result.matches.len(), k.min(records.len()));
        for m in &result.matches {
            let cents = m.distance_km * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
        for pair in result.matches.windows(2) {
            prop_assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }
}
