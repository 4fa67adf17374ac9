//! Core configuration types and loading.

use chatfeed_proto::NormalizerConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::output::OutputConfig;
use super::pipeline::PipelineConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Feed configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Buffer hand-off between the line reader and the drain loop.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Chat normalization policy.
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Output format for rendered messages.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
