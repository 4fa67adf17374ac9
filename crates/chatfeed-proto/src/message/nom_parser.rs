//! Nom-based IRC line parser.
//!
//! Splits a line into borrowed tag, prefix, command and parameter slices.
//! Every sub-parser here accepts empty input, so a line of any shape yields
//! a [`ParsedLine`]; deciding whether the result is usable is left to the
//! caller.

use nom::{
    bytes::complete::take_till,
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

fn is_token_end(c: char) -> bool {
    c == ' ' || c == '\r' || c == '\n'
}

/// Parse IRCv3 message tags (the part after `@` and before the first space).
fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_till(is_token_end))(input)
}

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_till(is_token_end))(input)
}

/// Parse the command token. May be empty on malformed lines.
fn parse_command(input: &str) -> IResult<&str, &str> {
    take_till(is_token_end)(input)
}

/// Parse IRC message parameters from the remaining input after the command.
///
/// Handles both regular space-separated parameters and the trailing parameter
/// (prefixed with `:`) which may contain spaces. Multiple consecutive spaces
/// are treated as a single separator.
fn parse_params(input: &str) -> (&str, SmallVec<[&str; 4]>) {
    let mut params: SmallVec<[&str; 4]> = SmallVec::new();
    let mut rest = input;

    while let Some(b' ') = rest.as_bytes().first().copied() {
        // Skip all leading spaces (handles multiple consecutive spaces)
        while rest.as_bytes().first() == Some(&b' ') {
            rest = &rest[1..];
        }

        if rest.is_empty() || rest.starts_with('\r') || rest.starts_with('\n') {
            break;
        }

        if let Some(b':') = rest.as_bytes().first().copied() {
            // Trailing parameter - everything after `:` until line end
            let after_colon = &rest[1..];
            let end = after_colon.find(['\r', '\n']).unwrap_or(after_colon.len());
            params.push(&after_colon[..end]);
            rest = &after_colon[end..];
            break;
        }

        let end = rest.find([' ', '\r', '\n']).unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    (rest, params)
}

/// Parse a complete IRC line into its components.
///
/// IRC message format:
/// ```text
/// [@tags] [:prefix] <command> [params...] [:trailing]
/// ```
fn parse_line(input: &str) -> IResult<&str, ParsedLine<'_>> {
    let (input, tags) = opt(parse_tags)(input)?;
    let (input, _) = space0(input)?;

    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;

    let (input, command) = parse_command(input)?;

    let (rest, params) = parse_params(input);

    Ok((
        rest,
        ParsedLine {
            tags,
            prefix,
            command,
            params,
        },
    ))
}

/// A parsed IRC line with borrowed string slices.
///
/// Intermediate representation between the raw line and
/// [`IrcMessage`](super::IrcMessage).
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct ParsedLine<'a> {
    /// Raw tags string (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix string (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token.
    pub command: &'a str,
    /// Command parameters, including trailing.
    pub params: SmallVec<[&'a str; 4]>,
}

impl<'a> ParsedLine<'a> {
    /// Split `input` into its components.
    ///
    /// Never fails: the grammar has no mandatory token, and should nom ever
    /// report an error the line degrades to an empty [`ParsedLine`].
    pub fn parse(input: &'a str) -> Self {
        match parse_line(input) {
            Ok((remaining, line)) => {
                if !remaining.trim_start_matches(['\r', '\n']).is_empty() {
                    tracing::trace!(remaining, "unparsed input after parameters");
                }
                line
            }
            Err(e) => {
                tracing::trace!(error = %e, input, "line did not parse, using empty message");
                ParsedLine::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let msg = ParsedLine::parse("PING");
        assert_eq!(msg.command, "PING");
        assert!(msg.tags.is_none());
        assert!(msg.prefix.is_none());
        assert!(msg.params.is_empty());
    }

    #[test]
    fn test_parse_command_with_params() {
        let msg = ParsedLine::parse("PRIVMSG #channel :Hello, world!");
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.params.as_slice(), &["#channel", "Hello, world!"]);
    }

    #[test]
    fn test_parse_with_prefix() {
        let msg = ParsedLine::parse(":nick!user@host PRIVMSG #channel :Hello");
        assert_eq!(msg.prefix, Some("nick!user@host"));
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.params.as_slice(), &["#channel", "Hello"]);
    }

    #[test]
    fn test_parse_with_tags() {
        let msg = ParsedLine::parse("@display-name=Foo;color=#112233 :foo PRIVMSG #ch :Hi");
        assert_eq!(msg.tags, Some("display-name=Foo;color=#112233"));
        assert_eq!(msg.prefix, Some("foo"));
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.params.as_slice(), &["#ch", "Hi"]);
    }

    #[test]
    fn test_parse_with_crlf() {
        let msg = ParsedLine::parse("PING :tmi.twitch.tv\r\n");
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.params.as_slice(), &["tmi.twitch.tv"]);
    }

    #[test]
    fn test_parse_trailing_keeps_spaces_and_colons() {
        let msg = ParsedLine::parse("PRIVMSG #ch :a  b :c");
        assert_eq!(msg.params.as_slice(), &["#ch", "a  b :c"]);
    }

    #[test]
    fn test_parse_collapses_middle_spaces() {
        let msg = ParsedLine::parse("USER   guest  0 * :Real Name");
        assert_eq!(msg.command, "USER");
        assert_eq!(msg.params.as_slice(), &["guest", "0", "*", "Real Name"]);
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg = ParsedLine::parse("PRIVMSG #channel :");
        assert_eq!(msg.params.as_slice(), &["#channel", ""]);
    }

    #[test]
    fn test_parse_no_param_limit() {
        let raw = "CMD p1 p2 p3 p4 p5 p6 p7 p8 p9 p10 p11 p12 p13 p14 p15 p16 :p17";
        let msg = ParsedLine::parse(raw);
        assert_eq!(msg.params.len(), 17);
        assert_eq!(msg.params[16], "p17");
    }

    #[test]
    fn test_parse_empty_line() {
        let msg = ParsedLine::parse("");
        assert_eq!(msg, ParsedLine::default());
    }

    #[test]
    fn test_parse_tags_only() {
        let msg = ParsedLine::parse("@a=b");
        assert_eq!(msg.tags, Some("a=b"));
        assert_eq!(msg.command, "");
        assert!(msg.params.is_empty());
    }

    #[test]
    fn test_parse_bare_prefix_marker() {
        let msg = ParsedLine::parse(": PRIVMSG");
        assert_eq!(msg.prefix, Some(""));
        assert_eq!(msg.command, "PRIVMSG");
    }

    #[test]
    fn test_parse_lenient_command() {
        // Not a valid RFC 2812 command, still parsed as one
        let msg = ParsedLine::parse("PING123 x");
        assert_eq!(msg.command, "PING123");
        assert_eq!(msg.params.as_slice(), &["x"]);
    }
}
