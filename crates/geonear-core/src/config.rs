use crate::error::{GeonearError, Result};
use crate::models::{ValidationMode, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for GeoNear
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_path: ConfigValue<PathBuf>,
    pub location_path: ConfigValue<PathBuf>,
    pub top_k: ConfigValue<usize>,
    pub validation_mode: ConfigValue<ValidationMode>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_path: ConfigValue::new(PathBuf::from("geopoints.json"), ConfigSource::Default),
            location_path: ConfigValue::new(
                PathBuf::from("user_location.json"),
                ConfigSource::Default,
            ),
            top_k: ConfigValue::new(DEFAULT_TOP_K, ConfigSource::Default),
            validation_mode: ConfigValue::new(ValidationMode::Lenient, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeonearError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeonearError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_path) = file_config.data_path {
            self.data_path.update(data_path, ConfigSource::File);
        }

        if let Some(location_path) = file_config.location_path {
            self.location_path.update(location_path, ConfigSource::File);
        }

        if let Some(top_k) = file_config.top_k {
            self.top_k.update(top_k, ConfigSource::File);
        }

        if let Some(validation_mode) = file_config.validation_mode {
            self.validation_mode.update(validation_mode, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEONEAR_DATA_PATH
        if let Ok(path) = env::var("GEONEAR_DATA_PATH") {
            self.data_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        // GEONEAR_LOCATION_PATH
        if let Ok(path) = env::var("GEONEAR_LOCATION_PATH") {
            self.location_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        // GEONEAR_TOP_K
        if let Ok(top_k_str) = env::var("GEONEAR_TOP_K") {
            match top_k_str.parse::<usize>() {
                Ok(top_k) => self.top_k.update(top_k, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEONEAR_TOP_K value '{}': expected a non-negative integer",
                    top_k_str
                ),
            }
        }

        // GEONEAR_VALIDATION_MODE
        if let Ok(mode_str) = env::var("GEONEAR_VALIDATION_MODE") {
            match parse_validation_mode(&mode_str) {
                Ok(mode) => self.validation_mode.update(mode, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEONEAR_VALIDATION_MODE value '{}': expected strict or lenient",
                    mode_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_path) = overrides.data_path {
            self.data_path.update(data_path, ConfigSource::Cli);
        }

        if let Some(location_path) = overrides.location_path {
            self.location_path.update(location_path, ConfigSource::Cli);
        }

        if let Some(top_k) = overrides.top_k {
            self.top_k.update(top_k, ConfigSource::Cli);
        }

        if let Some(validation_mode) = overrides.validation_mode {
            self.validation_mode.update(validation_mode, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_path".to_string(),
            (self.data_path.value.display().to_string(), self.data_path.source),
        );

        map.insert(
            "location_path".to_string(),
            (self.location_path.value.display().to_string(), self.location_path.source),
        );

        map.insert("top_k".to_string(), (self.top_k.value.to_string(), self.top_k.source));

        map.insert(
            "validation_mode".to_string(),
            (format!("{:?}", self.validation_mode.value), self.validation_mode.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_path: Option<PathBuf>,
    location_path: Option<PathBuf>,
    top_k: Option<usize>,
    validation_mode: Option<ValidationMode>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub location_path: Option<PathBuf>,
    pub top_k: Option<usize>,
    pub validation_mode: Option<ValidationMode>,
}

/// Parse validation mode from string
pub fn parse_validation_mode(s: &str) -> Result<ValidationMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidationMode::Strict),
        "lenient" => Ok(ValidationMode::Lenient),
        _ => Err(GeonearError::ConfigInvalid {
            key: "validation_mode".to_string(),
            reason: format!("Invalid validation mode: {}. Use strict or lenient", s),
        }),
    }
}
