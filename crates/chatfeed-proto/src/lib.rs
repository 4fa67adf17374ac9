//! # chatfeed-proto
//!
//! Turns raw lines of the Twitch flavour of IRCv3 into render-ready chat
//! messages.
//!
//! ## Features
//!
//! - Total (never failing) parsing of tagged IRC lines into [`IrcMessage`]
//! - Normalization of `PRIVMSG`-shaped messages into [`ChatMessage`]
//! - Emote placement decoding from the `emotes` tag
//! - A plain FIFO [`Queue`] for handing parsed lines from a producer to a consumer

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use chatfeed_proto::{to_chat_message, IrcMessage, Queue};
//!
//! let raw = "@display-name=Foo;color=#112233;emotes=25:0-1 \
//!            :foo!foo@foo.tmi.twitch.tv PRIVMSG #channel :Kappa hello";
//!
//! let mut queue = Queue::new();
//! queue.offer(IrcMessage::parse(raw));
//!
//! let parsed = queue.poll().expect("one message queued");
//! let chat = to_chat_message(&parsed).expect("a chat line");
//!
//! assert_eq!(chat.sender_name(), "Foo");
//! assert_eq!(chat.sender_display_color(), "#112233");
//! assert_eq!(chat.emotes().get("25").map(String::as_str), Some("Ka"));
//! ```

pub mod buffer;
pub mod chat;
pub mod error;
pub mod message;

pub use self::buffer::Queue;
pub use self::chat::{
    to_chat_message, ChatMessage, Normalizer, NormalizerConfig, DEFAULT_COLOR,
    DEFAULT_SENDER_NAME,
};
pub use self::error::NormalizeError;
pub use self::message::tags::unescape_tag_value;
pub use self::message::IrcMessage;
