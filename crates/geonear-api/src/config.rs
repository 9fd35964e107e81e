use std::env;
use std::path::PathBuf;

use geonear_core::config::LayeredConfig;
use geonear_core::error::Result;
use geonear_core::models::ValidationMode;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub dataset: DatasetSettings,
}

/// Dataset and query settings resolved from the layered configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSettings {
    pub data_path: PathBuf,
    pub location_path: PathBuf,
    pub top_k: usize,
    pub validation_mode: ValidationMode,
}

impl From<&LayeredConfig> for DatasetSettings {
    fn from(config: &LayeredConfig) -> Self {
        Self {
            data_path: config.data_path.value.clone(),
            location_path: config.location_path.value.clone(),
            top_k: config.top_k.value,
            validation_mode: config.validation_mode.value,
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self::from(&LayeredConfig::with_defaults())
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEONEAR_CONFIG` optionally names a TOML file that sits below the
    /// `GEONEAR_*` dataset variables in precedence.
    pub fn from_env() -> Result<Self> {
        let port = env::var("GEONEAR_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);

        let cors_origin =
            env::var("GEONEAR_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let mut layered = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("GEONEAR_CONFIG") {
            layered = layered.load_from_file(path)?;
        }
        let layered = layered.load_from_env();

        Ok(Self {
            port,
            cors_origin,
            dataset: DatasetSettings::from(&layered),
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
