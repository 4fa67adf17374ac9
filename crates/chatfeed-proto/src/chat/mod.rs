//! Normalization of parsed lines into display-ready chat messages.
//!
//! [`to_chat_message`] applies the lenient policy: anything that is not a
//! `target :body` line is skipped, and bad tags fall back to defaults. A
//! [`Normalizer`] built with `strict = true` reports malformed tags instead.

mod emotes;

use std::collections::HashMap;

use crate::error::{NormalizeError, Result};
use crate::message::tags::unescape_tag_value;
use crate::message::IrcMessage;

use self::emotes::decode_emotes;

/// Sender name used when the line carries no usable `display-name` tag.
pub const DEFAULT_SENDER_NAME: &str = "Unknown";

/// Color used when the line carries no usable `color` tag.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Tag names read by the normalizer.
pub mod tag {
    /// Emote placements.
    pub const EMOTES: &str = "emotes";
    /// Sender's display name (escaped).
    pub const DISPLAY_NAME: &str = "display-name";
    /// Sender's chosen name color.
    pub const COLOR: &str = "color";
}

/// A chat line ready for display.
///
/// Built only by normalization; the emote map always refers to text present
/// in [`message`](Self::message) and the color is always 7 characters.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChatMessage {
    sender_name: String,
    message: String,
    emotes: HashMap<String, String>,
    sender_display_color: String,
}

impl ChatMessage {
    /// Display name of the sender.
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Emote id to the exact text of `message` it replaces.
    pub fn emotes(&self) -> &HashMap<String, String> {
        &self.emotes
    }

    /// Sender's name color, `#RRGGBB`.
    pub fn sender_display_color(&self) -> &str {
        &self.sender_display_color
    }
}

/// Normalization policy.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct NormalizerConfig {
    /// Reject lines with malformed `emotes` or `color` tags instead of
    /// skipping or defaulting them (default: false).
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
    /// Name used when `display-name` is missing or empty (default: "Unknown").
    #[cfg_attr(feature = "serde", serde(default = "default_sender_name"))]
    pub default_sender_name: String,
    /// Color used when `color` is missing or unusable (default: "#FFFFFF").
    #[cfg_attr(feature = "serde", serde(default = "default_color"))]
    pub default_color: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strict: false,
            default_sender_name: default_sender_name(),
            default_color: default_color(),
        }
    }
}

fn default_sender_name() -> String {
    DEFAULT_SENDER_NAME.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Converts parsed lines into [`ChatMessage`]s under a [`NormalizerConfig`].
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the given policy.
    ///
    /// A `default_color` that is not `#RRGGBB` is replaced by
    /// [`DEFAULT_COLOR`], and an empty `default_sender_name` by
    /// [`DEFAULT_SENDER_NAME`].
    pub fn new(mut config: NormalizerConfig) -> Self {
        if !is_hex_color(&config.default_color) {
            tracing::warn!(
                color = %config.default_color,
                "unusable default color, using {}",
                DEFAULT_COLOR
            );
            config.default_color = default_color();
        }
        if config.default_sender_name.is_empty() {
            config.default_sender_name = default_sender_name();
        }
        Self { config }
    }

    /// The active policy.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Convert `msg`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::NotChatMessage`] unless `msg` has exactly two
    /// parameters, [`NormalizeError::EmptyBody`] if the second is empty. In
    /// strict mode also [`NormalizeError::InvalidColor`],
    /// [`NormalizeError::InvalidEmote`] and [`NormalizeError::EmoteOutOfRange`].
    pub fn normalize(&self, msg: &IrcMessage) -> Result<ChatMessage> {
        let message = match msg.params.as_slice() {
            [_, body] if body.is_empty() => return Err(NormalizeError::EmptyBody),
            [_, body] => body.clone(),
            params => {
                return Err(NormalizeError::NotChatMessage { got: params.len() });
            }
        };

        let sender_name = msg
            .tag_value(tag::DISPLAY_NAME)
            .filter(|name| !name.is_empty())
            .map(sanitize_display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.config.default_sender_name.clone());

        let sender_display_color = self.display_color(msg.tag_value(tag::COLOR))?;

        let emotes = match msg.tag_value(tag::EMOTES) {
            Some(raw) => decode_emotes(raw, &message, self.config.strict)?,
            None => HashMap::new(),
        };

        Ok(ChatMessage {
            sender_name,
            message,
            emotes,
            sender_display_color,
        })
    }

    /// Convert `msg`, or `None` if it does not qualify as a chat line.
    pub fn to_chat_message(&self, msg: &IrcMessage) -> Option<ChatMessage> {
        match self.normalize(msg) {
            Ok(chat) => Some(chat),
            Err(e) => {
                tracing::debug!(
                    command = %msg.command,
                    reason = e.error_code(),
                    error = %e,
                    "dropping line"
                );
                None
            }
        }
    }

    fn display_color(&self, color: Option<&str>) -> Result<String> {
        match color {
            // Twitch sends `color=` for users who never picked one
            Some("") | None => Ok(self.config.default_color.clone()),
            Some(c) if self.config.strict => {
                if is_hex_color(c) {
                    Ok(c.to_owned())
                } else {
                    Err(NormalizeError::InvalidColor(c.to_owned()))
                }
            }
            Some(c) if c.chars().count() == 7 => Ok(c.to_owned()),
            _ => Ok(self.config.default_color.clone()),
        }
    }
}

/// Convert `msg` with the default lenient policy.
///
/// Returns `None` unless `msg` has exactly two parameters and a non-empty
/// body. Missing or unusable tags fall back to [`DEFAULT_SENDER_NAME`] and
/// [`DEFAULT_COLOR`]; undecodable emote entries are left out.
pub fn to_chat_message(msg: &IrcMessage) -> Option<ChatMessage> {
    Normalizer::default().to_chat_message(msg)
}

/// Decode tag escapes in a display name and drop control characters.
pub fn sanitize_display_name(raw: &str) -> String {
    unescape_tag_value(raw)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Whether `color` is `#` followed by exactly six hex digits.
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
