//! SLP string conventions for scope tokens.
//!
//! Scope lists travel as comma separated strings. Reserved characters inside
//! a scope are escaped with a backslash so that unescaped commas always
//! separate tokens. Comparison happens on the canonical form produced by
//! [`canonicalize`].

use crate::errors::ParseError;

/// Characters that must be escaped inside a scope token (RFC 2608 §5).
pub const RESERVED_CHARS: &str = "(),\\!<=>~;*+";

/// The escape character.
pub const ESCAPE_CHAR: char = '\\';

/// Separator between tokens in a scope list.
pub const LIST_SEPARATOR: char = ',';

/// Returns true if `c` must be escaped on the wire.
pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(c)
}

/// Canonicalize a scope token.
///
/// Performs:
/// 1. Trim leading and trailing whitespace
/// 2. Fold interior whitespace runs into a single space
/// 3. Lowercase
///
/// The result is idempotent: canonicalizing a canonical token returns it
/// unchanged.
///
/// # Example
///
/// ```
/// use scopekit_lib::strings::canonicalize;
///
/// assert_eq!(canonicalize("  Lighting   Desk "), "lighting desk");
/// assert_eq!(canonicalize("lighting desk"), "lighting desk");
/// ```
pub fn canonicalize(token: &str) -> String {
    let mut canonical = String::with_capacity(token.len());
    for word in token.split_whitespace() {
        if !canonical.is_empty() {
            canonical.push(' ');
        }
        canonical.extend(word.chars().flat_map(char::to_lowercase));
    }
    canonical
}

/// Escape a scope token for transmission.
///
/// Every reserved character `c` is written as `\c`.
///
/// ```
/// use scopekit_lib::strings::escape;
///
/// assert_eq!(escape("a,b"), "a\\,b");
/// ```
pub fn escape(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        if is_reserved(c) {
            escaped.push(ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    escaped
}

/// Reverse [`escape`].
///
/// Two escape forms are accepted: `\c` where `c` is a reserved character, and
/// the RFC 2608 hex form `\HH`. No reserved character is a hex digit, so the
/// forms cannot be confused.
///
/// # Errors
///
/// - [`ParseError::MalformedEscape`] for a trailing `\` or a `\` followed by
///   anything else.
/// - [`ParseError::InvalidUtf8`] if hex escapes decode to invalid UTF-8.
pub fn unescape(token: &str) -> Result<String, ParseError> {
    if !token.contains(ESCAPE_CHAR) {
        return Ok(token.to_string());
    }

    let bytes = token.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        match bytes.get(i + 1).copied() {
            Some(next) if next.is_ascii() && is_reserved(next as char) => {
                decoded.push(next);
                i += 2;
            }
            Some(high) if high.is_ascii_hexdigit() => {
                let low = bytes
                    .get(i + 2)
                    .copied()
                    .filter(u8::is_ascii_hexdigit)
                    .ok_or(ParseError::malformed_escape(i))?;
                decoded.push((hex_value(high) << 4) | hex_value(low));
                i += 3;
            }
            _ => return Err(ParseError::malformed_escape(i)),
        }
    }

    String::from_utf8(decoded).map_err(|_| ParseError::InvalidUtf8)
}

/// Split a scope list on unescaped commas.
///
/// A `\` consumes exactly the following character, so `a\,b` is a single
/// token. Tokens are returned still escaped.
pub fn split_list(raw: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            ESCAPE_CHAR => escaped = true,
            LIST_SEPARATOR => {
                tokens.push(&raw[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    tokens.push(&raw[start..]);
    tokens
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
