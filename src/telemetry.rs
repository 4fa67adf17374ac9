//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only rendered messages. The filter
/// comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Standardized span constructors for feed observability.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Span covering the whole feed.
    pub fn feed(source: &str) -> Span {
        info_span!("feed", source = %source)
    }

    /// Span for one drain of the shared buffer.
    pub fn drain(tick: u64, batch: usize) -> Span {
        debug_span!("drain", tick, batch)
    }
}
