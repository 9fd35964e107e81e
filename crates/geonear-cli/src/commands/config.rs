//! Config command implementation

use anyhow::Result;
use tabled::Tabled;

use crate::cli::Cli;
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;

    let mut values: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    values.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(ConfigOutput { values });
    }

    output.section("Configuration");

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let rows: Vec<ConfigRow> = values
        .into_iter()
        .map(|entry| ConfigRow {
            key: entry.key,
            value: entry.value,
            source: format!("{:?}", entry.source),
        })
        .collect();

    output.table(rows);
    Ok(())
}
