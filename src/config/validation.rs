//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("pipeline.drain_interval_ms must be greater than 0")]
    ZeroDrainInterval,
    #[error("pipeline.max_batch must be greater than 0")]
    ZeroMaxBatch,
    #[error("normalizer.default_sender_name must not be empty")]
    EmptyDefaultSenderName,
    #[error("normalizer.default_color must be #RRGGBB, got '{0}'")]
    InvalidDefaultColor(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.pipeline.drain_interval_ms == 0 {
        errors.push(ValidationError::ZeroDrainInterval);
    }
    if config.pipeline.max_batch == 0 {
        errors.push(ValidationError::ZeroMaxBatch);
    }

    if config.normalizer.default_sender_name.is_empty() {
        errors.push(ValidationError::EmptyDefaultSenderName);
    }

    // Defaults must themselves satisfy the 7-character color invariant
    let color = &config.normalizer.default_color;
    if !chatfeed_proto::chat::is_hex_color(color) {
        errors.push(ValidationError::InvalidDefaultColor(color.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
