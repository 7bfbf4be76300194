//! String quoting, escaping, and their inverses.
//!
//! TOON leaves most strings unquoted to save tokens. The predicates here
//! decide when a string can be emitted bare, and their classification must
//! agree with what the decoder infers from an unquoted token, otherwise
//! round-tripping breaks. In particular, any token the decoder would read
//! back as a number, boolean, or null has to be quoted on the way out.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::options::Delimiter;

/// Decides whether a string value must be quoted to survive a round trip.
///
/// A string must be quoted when it:
/// - is empty, or starts/ends with whitespace
/// - equals one of the reserved literals `true`, `false`, `null`
/// - starts with `-` (ambiguous with the list item marker)
/// - is numeric-like (would decode as a number)
/// - contains `:`, `"`, `\`, brackets, braces, a newline, carriage return,
///   tab, or the active delimiter byte
///
/// Only the *active* delimiter triggers quoting: with a pipe delimiter a
/// comma is plain text.
#[must_use]
pub fn needs_quoting(s: &str, delim: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    let bytes = s.as_bytes();
    if bytes[0].is_ascii_whitespace() || bytes[bytes.len() - 1].is_ascii_whitespace() {
        return true;
    }
    if s == "true" || s == "false" || s == "null" {
        return true;
    }
    if bytes[0] == b'-' {
        return true;
    }
    if is_numeric_like(s) {
        return true;
    }
    let active = delim.as_byte();
    s.bytes().any(|b| {
        matches!(
            b,
            b':' | b'"' | b'\\' | b'[' | b']' | b'{' | b'}' | b'\n' | b'\r' | b'\t'
        ) || b == active
    })
}

/// Tests whether a key can be emitted without quotes:
/// `^[A-Za-z_][A-Za-z0-9_.]*$`, bytes only.
#[must_use]
pub fn is_valid_bare_key(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
}

/// Lexical test for "would the decoder read this token as a number".
///
/// Matches an optional `-` followed by either a leading-zero form (`05`,
/// `0001`) or a JSON-style number token: digits, at most one `.` once
/// digits have begun, and an optional `e`/`E` exponent with optional sign
/// and at least one digit. Purely lexical; overflow does not matter.
#[must_use]
pub fn is_numeric_like(s: &str) -> bool {
    leading_zero_form(s) || number_form(s)
}

/// Optional `-`, then `0` immediately followed by another digit.
pub(crate) fn leading_zero_form(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s).as_bytes();
    digits.len() > 1 && digits[0] == b'0' && digits[1].is_ascii_digit()
}

fn number_form(s: &str) -> bool {
    let bytes = s.strip_prefix('-').unwrap_or(s).as_bytes();
    let mut i = 0;
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return false;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        if i >= bytes.len() || !bytes[i].is_ascii_digit() {
            return false;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i == bytes.len()
}

/// Parses an unquoted token as a number, or `None` if the decoder should
/// keep it as a string. Leading-zero forms like `05` stay strings.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    if leading_zero_form(s) || !number_form(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Escapes `\`, `"`, newline, carriage return, and tab. Everything else
/// passes through untouched.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Strips surrounding quotes and resolves the five recognized escapes.
///
/// `line` is the 1-based source line used in error values.
///
/// # Errors
///
/// [`Error::UnterminatedString`] when the closing quote is missing,
/// [`Error::InvalidEscape`] for any unrecognized `\x` or a lone trailing
/// backslash, [`Error::InvalidSyntax`] for content after the closing quote.
pub fn unescape(quoted: &str, line: usize) -> Result<String> {
    let Some(rest) = quoted.strip_prefix('"') else {
        return Err(Error::InvalidSyntax {
            line,
            message: "expected a quoted string".to_string(),
        });
    };
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                return if chars.as_str().is_empty() {
                    Ok(out)
                } else {
                    Err(Error::InvalidSyntax {
                        line,
                        message: "unexpected content after closing quote".to_string(),
                    })
                };
            }
            '\\' => match chars.next() {
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                _ => return Err(Error::InvalidEscape { line }),
            },
            other => out.push(other),
        }
    }
    Err(Error::UnterminatedString { line })
}

/// Quotes and escapes a string value only when [`needs_quoting`] says so.
#[must_use]
pub fn quote_value(s: &str, delim: Delimiter) -> Cow<'_, str> {
    if needs_quoting(s, delim) {
        Cow::Owned(format!("\"{}\"", escape(s)))
    } else {
        Cow::Borrowed(s)
    }
}

/// Quotes and escapes an object key unless it is a valid bare key.
#[must_use]
pub fn quote_key(s: &str) -> Cow<'_, str> {
    if is_valid_bare_key(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("\"{}\"", escape(s)))
    }
}
