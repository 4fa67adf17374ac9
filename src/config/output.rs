//! Output configuration.

use serde::Deserialize;

/// How rendered chat messages are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `sender: message` lines.
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format (default: json).
    #[serde(default)]
    pub format: OutputFormat,
}
