//! Error handling for the feed binary.
//!
//! Normalization rejects are not errors here: they are logged and the line
//! is dropped. What remains are failures of the surrounding plumbing.

use thiserror::Error;

/// Errors that stop the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("line reader task failed: {0}")]
    Reader(#[from] tokio::task::JoinError),
}

impl FeedError {
    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Encode(_) => "encode_error",
            Self::Reader(_) => "reader_error",
        }
    }
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
