//! Owned IRC message type.

use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

use super::nom_parser::ParsedLine;
use super::tags::split_tags;

/// A parsed protocol line.
///
/// Tag values are kept exactly as they appeared on the wire (still escaped);
/// consumers unescape the tags they display.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct IrcMessage {
    /// IRCv3 tags, keyed by tag name. Empty when the line had no tag segment.
    pub tags: HashMap<String, String>,
    /// Message source (`nick!user@host` or a server name).
    pub prefix: Option<String>,
    /// Command verb, e.g. `PRIVMSG`. Empty on malformed lines.
    pub command: String,
    /// Positional parameters; the last may contain spaces.
    pub params: Vec<String>,
}

impl IrcMessage {
    /// Parse one protocol line.
    ///
    /// This never fails. A malformed line produces a message with whatever
    /// fields could be recovered, possibly all empty.
    ///
    /// ```
    /// use chatfeed_proto::IrcMessage;
    ///
    /// let msg = IrcMessage::parse("@color=#112233 :foo PRIVMSG #ch :hi there");
    /// assert_eq!(msg.tag_value("color"), Some("#112233"));
    /// assert_eq!(msg.command, "PRIVMSG");
    /// assert_eq!(msg.params, vec!["#ch", "hi there"]);
    /// ```
    pub fn parse(line: &str) -> Self {
        ParsedLine::parse(line).into()
    }

    /// Get the raw value of a tag, if present.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Nickname portion of the prefix (everything before `!`).
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix
            .as_deref()
            .map(|p| p.split(['!', '@']).next().unwrap_or(p))
            .filter(|nick| !nick.is_empty())
    }
}

impl<'a> From<ParsedLine<'a>> for IrcMessage {
    fn from(line: ParsedLine<'a>) -> Self {
        let tags = line
            .tags
            .map(|raw| {
                split_tags(raw)
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect()
            })
            .unwrap_or_default();

        IrcMessage {
            tags,
            prefix: line.prefix.map(str::to_owned),
            command: line.command.to_owned(),
            params: line.params.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl From<&str> for IrcMessage {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl FromStr for IrcMessage {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
