//! Decoding of the `emotes` tag.
//!
//! Wire grammar: `id:start-end[,start-end...][/id:start-end...]`, offsets
//! counted in characters and `end` inclusive. Only the first range of each
//! id is decoded; the value stored is the literal text the emote covers.

use std::collections::HashMap;

use crate::error::{NormalizeError, Result};

/// Decode an `emotes` tag value against `message`.
///
/// In lenient mode malformed entries are skipped, an `end` past the message is
/// clamped to its last character, and a `start` past the message drops the
/// entry. In strict mode each of those is an error.
pub(crate) fn decode_emotes(
    raw: &str,
    message: &str,
    strict: bool,
) -> Result<HashMap<String, String>> {
    let mut emotes = HashMap::new();
    if raw.is_empty() {
        return Ok(emotes);
    }

    let len = message.chars().count();

    for group in raw.split('/') {
        match decode_group(group, message, len, strict) {
            Ok((id, text)) => {
                emotes.insert(id.to_owned(), text);
            }
            Err(e) if strict => return Err(e),
            Err(e) => {
                tracing::trace!(group, error = %e, "skipping emote entry");
            }
        }
    }

    Ok(emotes)
}

/// Decode one `id:ranges` group into the emote id and the text it covers.
fn decode_group<'a>(
    group: &'a str,
    message: &str,
    len: usize,
    strict: bool,
) -> Result<(&'a str, String)> {
    let invalid = || NormalizeError::InvalidEmote(group.to_owned());

    let (id, ranges) = group.split_once(':').ok_or_else(invalid)?;
    let first = ranges.split(',').next().unwrap_or(ranges);
    let (start, end) = parse_range(first).ok_or_else(invalid)?;

    if end < start {
        return Err(invalid());
    }

    let mut last = end;
    if end >= len {
        if strict || start >= len {
            return Err(NormalizeError::EmoteOutOfRange {
                id: id.to_owned(),
                start,
                end,
                len,
            });
        }
        last = len - 1;
    }

    Ok((id, slice_chars(message, start, last)))
}

fn parse_range(range: &str) -> Option<(usize, usize)> {
    let (start, end) = range.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Characters `start..=end` of `message`.
fn slice_chars(message: &str, start: usize, end: usize) -> String {
    message.chars().skip(start).take(end - start + 1).collect()
}
