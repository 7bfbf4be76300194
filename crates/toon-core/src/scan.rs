//! Line-level scanning primitives.
//!
//! The decoder never looks at raw source text directly. This module splits
//! the input into [`Line`]s with their indentation depth resolved, and
//! provides the quote-aware scanning helpers shared by the header parser
//! and the decoder: finding a byte outside quotes, splitting on a
//! delimiter outside quotes, and recognizing list item markers.

use crate::error::{Error, Result};
use crate::options::Delimiter;

/// A physical source line, ready for structural parsing.
#[derive(Debug)]
pub(crate) struct Line<'a> {
    /// 1-based line number in the original source.
    pub number: usize,
    /// Indentation depth in units of the configured indent width.
    pub depth: usize,
    /// Line content with the indent prefix (and any trailing `\r`) removed.
    pub content: &'a str,
    /// All-whitespace line. Depth is meaningless for these.
    pub blank: bool,
}

/// Splits source text into lines and computes each line's depth.
///
/// Splitting is on `\n`; a trailing `\r` is stripped from each line so
/// CRLF input parses identically to LF input. Blank lines are kept in the
/// stream, flagged, so array parsers can reject interior blanks in strict
/// mode.
pub(crate) fn tokenize(source: &str, indent: usize, strict: bool) -> Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (idx, raw) in source.split('\n').enumerate() {
        let number = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.bytes().all(|b| b.is_ascii_whitespace()) {
            lines.push(Line {
                number,
                depth: 0,
                content: "",
                blank: true,
            });
            continue;
        }
        let (depth, content) = compute_depth(raw, number, indent, strict)?;
        lines.push(Line {
            number,
            depth,
            content,
            blank: false,
        });
    }
    Ok(lines)
}

/// Maps a line's leading whitespace to a depth, returning the depth and the
/// content after the indent prefix.
///
/// Strict mode rejects tabs in the prefix and space counts that are not an
/// exact multiple of `indent`. Lenient mode counts a tab as one indent
/// width and rounds odd counts down.
pub(crate) fn compute_depth<'a>(
    line: &'a str,
    number: usize,
    indent: usize,
    strict: bool,
) -> Result<(usize, &'a str)> {
    let bytes = line.as_bytes();
    let mut spaces = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b' ' => spaces += 1,
            b'\t' => {
                if strict {
                    return Err(Error::InvalidIndentation {
                        line: number,
                        message: "tab in indent prefix".to_string(),
                    });
                }
                spaces += indent;
            }
            _ => break,
        }
        i += 1;
    }
    let unit = indent.max(1);
    if strict && spaces % unit != 0 {
        return Err(Error::InvalidIndentation {
            line: number,
            message: format!("{spaces} leading spaces is not a multiple of {unit}"),
        });
    }
    Ok((spaces / unit, &line[i..]))
}

/// Finds the first occurrence of `target` outside quoted regions.
///
/// The scan toggles an in-quotes flag on `"`; inside quotes a `\` consumes
/// the following byte, so escaped quotes do not end the region.
pub(crate) fn find_unquoted(s: &str, target: u8) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            match b {
                b'\\' => i += 1,
                b'"' => in_quotes = false,
                _ => {}
            }
        } else if b == b'"' {
            in_quotes = true;
        } else if b == target {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Splits `s` on every unquoted occurrence of the delimiter, trimming ASCII
/// spaces from each token. Always yields at least one token.
pub(crate) fn split_delimited(s: &str, delim: Delimiter) -> Vec<&str> {
    let target = delim.as_byte();
    let bytes = s.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            match b {
                b'\\' => i += 1,
                b'"' => in_quotes = false,
                _ => {}
            }
        } else if b == b'"' {
            in_quotes = true;
        } else if b == target {
            tokens.push(s[start..i].trim_matches(' '));
            start = i + 1;
        }
        i += 1;
    }
    tokens.push(s[start..].trim_matches(' '));
    tokens
}

/// For a string starting with `"`, returns the index of the matching
/// closing quote, honoring backslash escapes.
pub(crate) fn closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// A line is a list item iff it begins with `-` and is either exactly `-`
/// or continues with a space.
pub(crate) fn is_list_item(s: &str) -> bool {
    s.as_bytes().first() == Some(&b'-') && (s.len() == 1 || s.as_bytes()[1] == b' ')
}

/// Strips the `- ` marker; the bare `-` form yields an empty residue.
pub(crate) fn strip_list_marker(s: &str) -> &str {
    if s.len() == 1 {
        ""
    } else {
        &s[2..]
    }
}
