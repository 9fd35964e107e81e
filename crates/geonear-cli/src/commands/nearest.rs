//! Nearest command implementation

use anyhow::{Context, Result};
use geonear_retrieval::NearestPipeline;
use geonear_store::loader::{load_dataset, load_location};
use geonear_store::memory::MemoryDatasetStore;
use serde_json::json;
use tabled::Tabled;

use crate::cli::{Cli, NearestArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::NearestOutput;

pub fn execute(cli: &Cli, args: &NearestArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, args.k)?;
    let data_path = &config.data_path.value;
    let k = config.top_k.value;

    let reference = match (&args.location, args.lat, args.lon) {
        (Some(path), _, _) => load_location(path)
            .with_context(|| format!("Failed to read reference location from {}", path.display()))?,
        (None, Some(lat), Some(lon)) => json!({"latitude": lat, "longitude": lon}),
        _ => anyhow::bail!("Provide --lat and --lon, or --location"),
    };

    tracing::debug!(data_path = %data_path.display(), k, "Running nearest query");

    let dataset = load_dataset(data_path, config.validation_mode.value)
        .with_context(|| format!("Failed to load dataset {}", data_path.display()))?
        .into_dataset(data_path.display().to_string());

    if dataset.meta().rejected_count > 0 {
        output.warning(format!(
            "Skipped {} invalid record(s). Run 'geonear inspect' for details.",
            dataset.meta().rejected_count
        ));
    }

    let pipeline = NearestPipeline::new(MemoryDatasetStore::with_dataset(dataset));
    let result = pipeline.find_nearest(&reference, k)?;

    if output.is_json() {
        return output.result(NearestOutput {
            reference,
            k,
            points_evaluated: result.points_evaluated,
            matches: result.matches,
        });
    }

    if result.matches.is_empty() {
        output.info("No matches requested (k = 0)");
        return Ok(());
    }

    output.section(format!("Nearest {} of {} geopoints", result.matches.len(), result.points_evaluated));

    #[derive(Tabled)]
    struct MatchRow {
        #[tabled(rename = "#")]
        rank: usize,
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Latitude")]
        latitude: f64,
        #[tabled(rename = "Longitude")]
        longitude: f64,
        #[tabled(rename = "Distance (km)")]
        distance: String,
    }

    let rows: Vec<MatchRow> = result
        .matches
        .into_iter()
        .enumerate()
        .map(|(i, m)| MatchRow {
            rank: i + 1,
            id: m.id,
            name: m.name,
            latitude: m.latitude,
            longitude: m.longitude,
            distance: format!("{:.2}", m.distance_km),
        })
        .collect();

    output.table(rows);
    Ok(())
}
