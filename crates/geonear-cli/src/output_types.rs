use geonear_core::config::ConfigSource;
use geonear_core::models::NearestMatch;
use serde::Serialize;

/// Output for nearest command
#[derive(Debug, Serialize)]
pub struct NearestOutput {
    pub reference: serde_json::Value,
    pub k: usize,
    pub points_evaluated: usize,
    pub matches: Vec<NearestMatch>,
}

/// Output for inspect command
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub source: String,
    pub accepted: usize,
    pub rejected: Vec<RejectionInfo>,
}

#[derive(Debug, Serialize)]
pub struct RejectionInfo {
    pub index: usize,
    pub kind: &'static str,
    pub reason: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub values: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}
