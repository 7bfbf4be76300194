//! Array header parsing.
//!
//! Every array opens with a header of the form
//! `[N<delim?>]{fields?}: inline-values?`. The byte before the closing
//! bracket selects the per-array delimiter (`|` pipe, tab byte, comma
//! otherwise), the optional brace block names tabular columns, and
//! anything after the colon (minus one optional space) is the inline
//! value list. The same parser serves root arrays, keyed arrays, and
//! arrays nested in list items.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::quote::unescape;
use crate::scan::{closing_quote, find_unquoted, split_delimited};

/// Parsed metadata from an array header line.
#[derive(Debug, PartialEq)]
pub(crate) struct ArrayHeader<'a> {
    /// Declared element count.
    pub len: usize,
    /// Delimiter for inline values, field names, and rows of this array.
    pub delimiter: Delimiter,
    /// Tabular column names, when the `{...}` block is present.
    pub fields: Option<Vec<String>>,
    /// Text after the colon, when non-empty.
    pub inline: Option<&'a str>,
}

/// Positional test used for dispatch: the line carries `[`, `]`, and `:`
/// in that order, all outside quotes.
pub(crate) fn looks_like_header(s: &str) -> bool {
    match (
        find_unquoted(s, b'['),
        find_unquoted(s, b']'),
        find_unquoted(s, b':'),
    ) {
        (Some(open), Some(close), Some(colon)) => open < close && close < colon,
        _ => false,
    }
}

/// Parses an array header. `s` normally starts at `[`; a leading quoted
/// key is skipped so the header can be handed over together with the key
/// that introduced it.
pub(crate) fn parse_header(s: &str, line: usize) -> Result<ArrayHeader<'_>> {
    let mut rest = s;
    if rest.starts_with('"') {
        let close = closing_quote(rest).ok_or(Error::UnterminatedString { line })?;
        rest = rest[close + 1..].trim_start_matches(' ');
    }
    if !rest.starts_with('[') {
        return Err(Error::InvalidHeader {
            line,
            message: "expected '['".to_string(),
        });
    }
    let close = rest.find(']').ok_or_else(|| Error::InvalidHeader {
        line,
        message: "missing ']'".to_string(),
    })?;
    let inside = &rest[1..close];

    let (len_digits, delimiter) = match inside.as_bytes().last() {
        Some(b'\t') => (&inside[..inside.len() - 1], Delimiter::Tab),
        Some(b'|') => (&inside[..inside.len() - 1], Delimiter::Pipe),
        _ => (inside, Delimiter::Comma),
    };
    if len_digits.is_empty() || !len_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidLength { line });
    }
    let len: usize = len_digits
        .parse()
        .map_err(|_| Error::InvalidLength { line })?;

    let mut after = &rest[close + 1..];
    let mut fields = None;
    if after.starts_with('{') {
        let brace = find_unquoted(&after[1..], b'}').ok_or_else(|| Error::InvalidHeader {
            line,
            message: "missing '}'".to_string(),
        })? + 1;
        let mut names = Vec::new();
        for token in split_delimited(&after[1..brace], delimiter) {
            if token.starts_with('"') {
                names.push(unescape(token, line)?);
            } else {
                names.push(token.to_string());
            }
        }
        fields = Some(names);
        after = &after[brace + 1..];
    }

    let after = after.trim_start_matches(' ');
    let Some(after_colon) = after.strip_prefix(':') else {
        return Err(Error::MissingColon { line });
    };
    // exactly one optional space, then the inline tail
    let tail = after_colon.strip_prefix(' ').unwrap_or(after_colon);
    let inline = if tail.is_empty() { None } else { Some(tail) };

    Ok(ArrayHeader {
        len,
        delimiter,
        fields,
        inline,
    })
}
