//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct and loading (Config, ConfigError)
//! - [`pipeline`]: Producer/consumer hand-off settings (PipelineConfig)
//! - [`output`]: Renderer selection (OutputConfig, OutputFormat)
//! - [`validation`]: Startup validation of loaded values
//!
//! The `[normalizer]` section deserializes straight into
//! [`chatfeed_proto::NormalizerConfig`].

mod output;
mod pipeline;
mod types;
mod validation;

pub use output::OutputFormat;
pub use pipeline::PipelineConfig;
pub use types::{Config, ConfigError};
pub use validation::validate;
