//! IRCv3 message tag escaping utilities.

/// Escape sequences allowed in tag values, as `(escaped, literal)` pairs.
///
/// The escaped character is the one following the backslash on the wire.
pub const TAG_ESCAPES: &[(char, char)] = &[
    (':', ';'),
    ('s', ' '),
    ('\\', '\\'),
    ('r', '\r'),
    ('n', '\n'),
];

/// Split a raw tag segment (without the leading `@`) into key/value pairs.
///
/// Empty entries are skipped and a key without `=` gets an empty value.
/// Values are returned as they appear on the wire.
pub fn split_tags(tags: &str) -> impl Iterator<Item = (&str, &str)> {
    tags.split(';').filter(|s| !s.is_empty()).map(|tag| {
        let mut iter = tag.splitn(2, '=');
        let key = iter.next().unwrap_or("");
        let value = iter.next().unwrap_or("");
        (key, value)
    })
}

/// Unescape a tag value from wire format.
///
/// Known sequences come from [`TAG_ESCAPES`]. An unknown sequence keeps the
/// escaped character and drops the backslash; a trailing lone backslash is
/// dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match iter.next() {
            Some(escaped) => {
                let literal = TAG_ESCAPES
                    .iter()
                    .find(|(from, _)| *from == escaped)
                    .map_or(escaped, |(_, to)| *to);
                unescaped.push(literal);
            }
            None => break,
        }
    }
    unescaped
}
