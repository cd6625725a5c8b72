//! Filename-safe escaping for tag values
//!
//! Tag values become part of a file name, so characters that are unsafe on
//! common filesystems are replaced by `^` followed by two hex digits of their
//! ASCII code. The escape character itself is protected first, so a literal
//! `^20` typed by a user survives as `^5e20` and never decodes to a space.
//!
//! # Escape table
//!
//! | Raw | Encoded |
//! |-----|---------|
//! | `^` | `^5e`   |
//! | ` ` | `^20`   |
//! | `"` | `^22`   |
//! | `*` | `^2A`   |
//! | `/` | `^2F`   |
//! | `:` | `^3A`   |
//! | `<` | `^3C`   |
//! | `>` | `^3E`   |
//! | `?` | `^3F`   |
//! | `\` | `^5C`   |
//! | `|` | `^7C`   |
//!
//! Everything else (other punctuation, non-ASCII) passes through untouched.
//!
//! # Examples
//!
//! ```
//! use namaste::escape::{decode, encode};
//!
//! assert_eq!(encode("Twain, Mark"), "Twain,^20Mark");
//! assert_eq!(decode("Twain,^20Mark"), "Twain, Mark");
//! assert_eq!(encode("^20"), "^5e20");
//! assert_eq!(decode("^5e20"), "^20");
//! ```

/// The reserved escape character
pub const ESCAPE_CHAR: char = '^';

/// Encoded form of the escape character itself
const ESCAPED_CARET: &str = "^5e";

/// Filesystem-unsafe characters and their encoded forms
const UNSAFE_CHARS: [(char, &str); 10] = [
    (' ', "^20"),
    ('"', "^22"),
    ('*', "^2A"),
    ('/', "^2F"),
    (':', "^3A"),
    ('<', "^3C"),
    ('>', "^3E"),
    ('?', "^3F"),
    ('\\', "^5C"),
    ('|', "^7C"),
];

fn escaped_form(c: char) -> Option<&'static str> {
    if c == ESCAPE_CHAR {
        return Some(ESCAPED_CARET);
    }
    UNSAFE_CHARS
        .iter()
        .find(|(raw, _)| *raw == c)
        .map(|(_, code)| *code)
}

/// Map the two hex digits following `^` back to the original character
fn unescaped_char(code: &str) -> Option<char> {
    if code.eq_ignore_ascii_case(&ESCAPED_CARET[1..]) {
        return Some(ESCAPE_CHAR);
    }
    UNSAFE_CHARS
        .iter()
        .find(|(_, encoded)| encoded[1..].eq_ignore_ascii_case(code))
        .map(|(raw, _)| *raw)
}

/// Encode a raw value into its filename-safe form
///
/// Every `^` becomes `^5e` and every unsafe character becomes its table code.
/// Characters are mapped one at a time, so an inserted escape is never
/// escaped again.
#[must_use]
pub fn encode(raw: &str) -> String {
    if !needs_escaping(raw) {
        return raw.to_owned();
    }

    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        match escaped_form(c) {
            Some(code) => encoded.push_str(code),
            None => encoded.push(c),
        }
    }
    encoded
}

/// Decode a filename-safe value back into its raw form
///
/// Hex digits are matched case-insensitively. A `^` that does not start a
/// known escape sequence is kept verbatim, and a decoded `^` is never read
/// as the start of another sequence.
#[must_use]
pub fn decode(encoded: &str) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    let mut rest = encoded;

    while let Some(pos) = rest.find(ESCAPE_CHAR) {
        decoded.push_str(&rest[..pos]);
        let after = &rest[pos + ESCAPE_CHAR.len_utf8()..];

        match after.get(..2).and_then(unescaped_char) {
            Some(c) => {
                decoded.push(c);
                rest = &after[2..];
            }
            None => {
                decoded.push(ESCAPE_CHAR);
                rest = after;
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

/// Whether a value would be changed by [`encode`]
#[must_use]
pub fn needs_escaping(raw: &str) -> bool {
    raw.chars().any(|c| escaped_form(c).is_some())
}
