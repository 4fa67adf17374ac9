//! chatfeed - Twitch chat ingestion pipeline
//!
//! Reads raw IRC lines on stdin, buffers them, and writes normalized chat
//! messages to stdout on a fixed drain interval.

mod config;
mod error;
mod pipeline;
mod sink;
mod telemetry;

use crate::config::Config;
use crate::pipeline::Feed;
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(config_path) => Config::load(&config_path).map_err(|e| {
            error!(path = %config_path, error = %e, "Failed to load config");
            e
        })?,
        None => {
            info!("No config path given, using defaults");
            Config::default()
        }
    };

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s)", errors.len());
    }

    info!(
        drain_interval_ms = config.pipeline.drain_interval_ms,
        max_batch = config.pipeline.max_batch,
        strict = config.normalizer.strict,
        format = ?config.output.format,
        "Starting chatfeed"
    );

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut renderer = sink::for_format(
        config.output.format,
        std::io::BufWriter::new(std::io::stdout()),
    );

    let feed = Feed::new(&config);
    feed.run(input, &mut renderer)
        .instrument(telemetry::spans::feed("stdin"))
        .await
        .map_err(|e| {
            error!(error = %e, code = e.error_code(), "Feed stopped");
            e
        })?;

    Ok(())
}
