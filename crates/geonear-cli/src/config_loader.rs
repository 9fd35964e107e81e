//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use geonear_core::config::{CliConfigOverrides, LayeredConfig};
use geonear_core::models::ValidationMode;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILE: &str = "geonear.toml";

/// Load layered configuration: defaults, config file, environment, then CLI flags
pub fn load_config(cli: &Cli, top_k: Option<usize>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_file(cli.config.as_deref()) {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_path: cli.data.clone(),
        location_path: None,
        top_k,
        validation_mode: cli.strict.then_some(ValidationMode::Strict),
    });

    Ok(config)
}

/// An explicit `--config` must exist; the default file is optional
fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
