//! Inspect command implementation

use anyhow::{Context, Result};
use geonear_store::loader::load_dataset;
use tabled::Tabled;

use crate::cli::Cli;
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{InspectOutput, RejectionInfo};

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;
    let data_path = &config.data_path.value;

    let validated = load_dataset(data_path, config.validation_mode.value)
        .with_context(|| format!("Failed to validate dataset {}", data_path.display()))?;

    let rejected: Vec<RejectionInfo> = validated
        .rejected
        .iter()
        .map(|r| RejectionInfo {
            index: r.index,
            kind: r.reason.kind(),
            reason: r.reason.to_string(),
        })
        .collect();

    if output.is_json() {
        return output.result(InspectOutput {
            source: data_path.display().to_string(),
            accepted: validated.points.len(),
            rejected,
        });
    }

    output.section("Dataset");
    output.kv("Source", data_path.display());
    output.kv("Mode", format!("{:?}", config.validation_mode.value));
    output.kv("Accepted", validated.points.len());
    output.kv("Rejected", rejected.len());

    if rejected.is_empty() {
        output.success("All records are valid");
        return Ok(());
    }

    output.section("Rejected Records");

    #[derive(Tabled)]
    struct RejectionRow {
        #[tabled(rename = "Index")]
        index: usize,
        #[tabled(rename = "Kind")]
        kind: &'static str,
        #[tabled(rename = "Reason")]
        reason: String,
    }

    let rows: Vec<RejectionRow> = rejected
        .into_iter()
        .map(|r| RejectionRow {
            index: r.index,
            kind: r.kind,
            reason: r.reason,
        })
        .collect();

    output.table(rows);
    Ok(())
}
