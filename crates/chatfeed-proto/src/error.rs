//! Error types for chat message normalization.
//!
//! Parsing never fails, so the only errors this crate reports are the
//! reasons a parsed line could not become a [`ChatMessage`](crate::ChatMessage).

use thiserror::Error;

/// Convenience type alias for Results using [`NormalizeError`].
pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;

/// Why a parsed line was not turned into a chat message.
///
/// With the default lenient policy only [`NotChatMessage`](Self::NotChatMessage)
/// and [`EmptyBody`](Self::EmptyBody) are produced; the remaining variants are
/// strict-mode rejections of malformed tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// The line does not carry exactly a target and a body.
    #[error("not a chat message: expected 2 parameters, got {got}")]
    NotChatMessage {
        /// Actual number of parameters.
        got: usize,
    },

    /// The message body was empty.
    #[error("empty message body")]
    EmptyBody,

    /// An `emotes` tag entry could not be decoded.
    #[error("invalid emote entry: {0}")]
    InvalidEmote(String),

    /// An emote range points outside the message body.
    #[error("emote {id} range {start}-{end} outside message of {len} characters")]
    EmoteOutOfRange {
        /// The emote identifier.
        id: String,
        /// First character offset.
        start: usize,
        /// Last character offset (inclusive).
        end: usize,
        /// Length of the message in characters.
        len: usize,
    },

    /// The `color` tag is not of the form `#RRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

impl NormalizeError {
    /// Get a static code string for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            NormalizeError::NotChatMessage { .. } => "not_chat_message",
            NormalizeError::EmptyBody => "empty_body",
            NormalizeError::InvalidEmote(_) => "invalid_emote",
            NormalizeError::EmoteOutOfRange { .. } => "emote_out_of_range",
            NormalizeError::InvalidColor(_) => "invalid_color",
        }
    }
}
