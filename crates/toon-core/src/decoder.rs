//! TOON v2.0 decoder.
//!
//! Parsing is line-oriented: the source is tokenized into lines with
//! resolved depths, then a single forward cursor walks that vector in
//! recursive descent. Each parser consumes the lines belonging to its
//! construct and yields as soon as the depth drops below its own frame,
//! so no backtracking is ever needed.
//!
//! Strict mode (the default) enforces the shape invariants the format
//! declares: header counts match bodies, tabular rows match the field
//! list, indentation is exact, and blank lines cannot interrupt an array
//! body. Lenient mode accepts all of those and skips what it cannot
//! classify.

use crate::error::{Error, Result};
use crate::header::{self, ArrayHeader};
use crate::options::{DecodeOptions, Delimiter};
use crate::quote::{self, unescape};
use crate::scan::{self, Line};
use crate::value::{Map, Value};

/// Decodes TOON text into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use toon_core::{decode, toon, DecodeOptions};
///
/// let value = decode("x: 1\ny: 2", &DecodeOptions::default()).unwrap();
/// assert_eq!(value, toon!({ "x": 1, "y": 2 }));
/// ```
///
/// # Errors
///
/// Any of the decode-side [`Error`] kinds; see the [`error`](crate::error)
/// module. Strict mode adds count, width, indentation, separator, and
/// blank-line violations.
pub fn decode(source: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = scan::tokenize(source, options.indent, options.strict)?;
    let mut parser = Parser {
        lines,
        pos: 0,
        strict: options.strict,
    };
    parser.parse_root()
}

/// Recursive-descent parser over the tokenized line vector.
///
/// `pos` is the single forward cursor; every parsing method advances it
/// past the lines it consumed.
struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
    strict: bool,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Line<'a>> {
        self.lines.get(self.pos)
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(line) if line.blank) {
            self.pos += 1;
        }
    }

    /// First non-blank line at or after `start`, without advancing.
    fn next_nonblank_from(&self, start: usize) -> Option<&Line<'a>> {
        self.lines[start..].iter().find(|line| !line.blank)
    }

    /// Classifies the root form and parses the whole document.
    fn parse_root(&mut self) -> Result<Value> {
        self.skip_blanks();
        let Some(first) = self.peek() else {
            return Ok(Value::Object(Map::new()));
        };
        let (content, number) = (first.content, first.number);

        let value = if content.starts_with('[') && header::looks_like_header(content) {
            self.parse_array_line(content, 0, number)?
        } else if self.single_nonblank_line() && scan::find_unquoted(content, b':').is_none() {
            self.pos += 1;
            self.parse_primitive(content, number)?
        } else {
            return self.parse_object(0);
        };

        if self.strict {
            self.skip_blanks();
            if let Some(extra) = self.peek() {
                return Err(Error::InvalidSyntax {
                    line: extra.number,
                    message: "unexpected content after document root".to_string(),
                });
            }
        }
        Ok(value)
    }

    fn single_nonblank_line(&self) -> bool {
        self.lines.iter().filter(|line| !line.blank).count() == 1
    }

    /// Parses an object whose entries sit at exactly `depth`. Stops at the
    /// first shallower line.
    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        let mut map = Map::new();
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else { break };
            let (content, line_depth, number) = (line.content, line.depth, line.number);
            if line_depth < depth {
                break;
            }
            if line_depth > depth {
                if self.strict {
                    return Err(Error::InvalidIndentation {
                        line: number,
                        message: "line is indented past its parent".to_string(),
                    });
                }
                self.pos += 1;
                continue;
            }
            if let Some((key, value)) = self.parse_entry(content, depth, number)? {
                map.insert(key, value);
            }
        }
        Ok(Value::Object(map))
    }

    /// Parses one `key: value` (or `key[...]`) line plus whatever child
    /// lines its value spans. Returns `None` when a separator-less line was
    /// skipped in lenient mode. Always advances the cursor.
    fn parse_entry(
        &mut self,
        content: &'a str,
        depth: usize,
        number: usize,
    ) -> Result<Option<(String, Value)>> {
        let Some((key, rest)) = self.split_key(content, number)? else {
            if self.strict {
                return Err(Error::MissingColon { line: number });
            }
            self.pos += 1;
            return Ok(None);
        };

        if rest.starts_with('[') {
            let value = self.parse_array_line(rest, depth, number)?;
            return Ok(Some((key, value)));
        }

        // rest starts with ':'; eat at most one space of the tail
        let tail = &rest[1..];
        let tail = tail.strip_prefix(' ').unwrap_or(tail);

        if !tail.is_empty() {
            if tail.starts_with('[') && header::looks_like_header(tail) {
                let value = self.parse_array_line(tail, depth, number)?;
                return Ok(Some((key, value)));
            }
            self.pos += 1;
            let value = self.parse_primitive(tail, number)?;
            return Ok(Some((key, value)));
        }

        // empty tail: nested object when the next line is deeper
        self.pos += 1;
        if let Some(next) = self.next_nonblank_from(self.pos) {
            if next.depth > depth {
                let child = self.parse_object(depth + 1)?;
                return Ok(Some((key, child)));
            }
        }
        Ok(Some((key, Value::Object(Map::new()))))
    }

    /// Splits a line into its key and the remainder starting at `:` or `[`.
    /// Returns `None` when the line has neither separator.
    fn split_key(&self, content: &'a str, number: usize) -> Result<Option<(String, &'a str)>> {
        if content.starts_with('"') {
            let close = scan::closing_quote(content)
                .ok_or(Error::UnterminatedString { line: number })?;
            let key = unescape(&content[..=close], number)?;
            let rest = content[close + 1..].trim_start_matches(' ');
            if rest.starts_with(':') || rest.starts_with('[') {
                return Ok(Some((key, rest)));
            }
            return Ok(None);
        }
        let colon = scan::find_unquoted(content, b':');
        let bracket = scan::find_unquoted(content, b'[');
        let split = match (colon, bracket) {
            (Some(c), Some(b)) => c.min(b),
            (Some(c), None) => c,
            _ => return Ok(None),
        };
        let key = content[..split].trim_matches(' ').to_string();
        Ok(Some((key, &content[split..])))
    }

    /// Parses an array whose header occupies the current line. `content`
    /// is the header text (starting at `[`), `depth` the header's depth.
    fn parse_array_line(
        &mut self,
        content: &'a str,
        depth: usize,
        number: usize,
    ) -> Result<Value> {
        let hdr: ArrayHeader<'a> = header::parse_header(content, number)?;
        self.pos += 1;

        if let Some(inline) = hdr.inline {
            let tokens = scan::split_delimited(inline, hdr.delimiter);
            if self.strict && tokens.len() != hdr.len {
                return Err(Error::CountMismatch {
                    line: number,
                    expected: hdr.len,
                    found: tokens.len(),
                });
            }
            let mut items = Vec::with_capacity(tokens.len());
            for token in tokens {
                items.push(self.parse_primitive(token, number)?);
            }
            return Ok(Value::Array(items));
        }

        if let Some(fields) = hdr.fields {
            return self.parse_tabular_rows(&fields, hdr.delimiter, hdr.len, depth + 1, number);
        }

        self.parse_list_items(hdr.len, depth + 1, number)
    }

    /// Consumes consecutive row lines at `row_depth` and zips each against
    /// the field list.
    fn parse_tabular_rows(
        &mut self,
        fields: &[String],
        delimiter: Delimiter,
        expected: usize,
        row_depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let width = fields.len();
        let mut rows = Vec::new();
        loop {
            let Some(line) = self.peek() else { break };
            if line.blank {
                let number = line.number;
                let continues = self
                    .next_nonblank_from(self.pos + 1)
                    .is_some_and(|next| next.depth == row_depth && is_row(next.content, delimiter));
                if !continues {
                    break;
                }
                if self.strict {
                    return Err(Error::BlankLineInArray { line: number });
                }
                self.pos += 1;
                continue;
            }
            if line.depth != row_depth || !is_row(line.content, delimiter) {
                break;
            }
            let (content, number) = (line.content, line.number);
            self.pos += 1;

            let cells = scan::split_delimited(content, delimiter);
            if self.strict && cells.len() != width {
                return Err(Error::WidthMismatch {
                    line: number,
                    expected: width,
                    found: cells.len(),
                });
            }
            let mut row = Map::with_capacity(width);
            for (i, field) in fields.iter().enumerate() {
                let value = match cells.get(i) {
                    Some(cell) => self.parse_primitive(cell, number)?,
                    None => Value::Null,
                };
                row.insert(field.clone(), value);
            }
            rows.push(Value::Object(row));
        }
        if self.strict && rows.len() != expected {
            return Err(Error::CountMismatch {
                line: header_line,
                expected,
                found: rows.len(),
            });
        }
        Ok(Value::Array(rows))
    }

    /// Consumes consecutive `- ` items at `item_depth`.
    fn parse_list_items(
        &mut self,
        expected: usize,
        item_depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let mut items = Vec::new();
        loop {
            let Some(line) = self.peek() else { break };
            if line.blank {
                let number = line.number;
                let continues = self.next_nonblank_from(self.pos + 1).is_some_and(|next| {
                    next.depth == item_depth && scan::is_list_item(next.content)
                });
                if !continues {
                    break;
                }
                if self.strict {
                    return Err(Error::BlankLineInArray { line: number });
                }
                self.pos += 1;
                continue;
            }
            if line.depth != item_depth || !scan::is_list_item(line.content) {
                break;
            }
            let (content, number) = (line.content, line.number);
            let residue = scan::strip_list_marker(content);
            items.push(self.parse_list_residue(residue, item_depth, number)?);
        }
        if self.strict && items.len() != expected {
            return Err(Error::CountMismatch {
                line: header_line,
                expected,
                found: items.len(),
            });
        }
        Ok(Value::Array(items))
    }

    /// Parses what follows a list marker. The cursor still points at the
    /// marker line.
    fn parse_list_residue(
        &mut self,
        residue: &'a str,
        item_depth: usize,
        number: usize,
    ) -> Result<Value> {
        // bare marker: empty object, or a nested object if children follow
        if residue.is_empty() {
            self.pos += 1;
            if let Some(next) = self.next_nonblank_from(self.pos) {
                if next.depth > item_depth {
                    return self.parse_object(item_depth + 1);
                }
            }
            return Ok(Value::Object(Map::new()));
        }

        // nested array spliced onto the marker
        if residue.starts_with('[') && header::looks_like_header(residue) {
            return self.parse_array_line(residue, item_depth, number);
        }

        // object item: the residue is its first entry, further entries sit
        // one level past the marker
        if scan::find_unquoted(residue, b':').is_some() {
            let mut map = Map::new();
            if let Some((key, value)) = self.parse_entry(residue, item_depth + 1, number)? {
                map.insert(key, value);
            }
            loop {
                let Some(line) = self.peek() else { break };
                if line.blank {
                    let blank_number = line.number;
                    let continues = self.next_nonblank_from(self.pos + 1).is_some_and(|next| {
                        next.depth == item_depth + 1 && !scan::is_list_item(next.content)
                    });
                    if !continues {
                        break;
                    }
                    if self.strict {
                        return Err(Error::BlankLineInArray { line: blank_number });
                    }
                    self.pos += 1;
                    continue;
                }
                if line.depth != item_depth + 1 || scan::is_list_item(line.content) {
                    break;
                }
                let (content, line_number) = (line.content, line.number);
                if let Some((key, value)) =
                    self.parse_entry(content, item_depth + 1, line_number)?
                {
                    map.insert(key, value);
                }
            }
            return Ok(Value::Object(map));
        }

        self.pos += 1;
        self.parse_primitive(residue, number)
    }

    /// Parses a leaf token: quoted string, reserved literal, number, or
    /// bare string. Leading-zero tokens like `05` stay strings.
    fn parse_primitive(&self, token: &str, line: usize) -> Result<Value> {
        let token = token.trim_matches(' ');
        if token.is_empty() {
            if self.strict {
                return Err(Error::InvalidSyntax {
                    line,
                    message: "empty value".to_string(),
                });
            }
            return Ok(Value::String(String::new()));
        }
        if token.starts_with('"') {
            return unescape(token, line).map(Value::String);
        }
        match token {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => match quote::parse_number(token) {
                Some(n) => Ok(Value::Number(n)),
                None => Ok(Value::String(token.to_string())),
            },
        }
    }
}

/// Row test for tabular bodies: the first unquoted delimiter comes before
/// any unquoted colon, or the line has a delimiter and no colon, or
/// neither (the single-column case).
fn is_row(content: &str, delimiter: Delimiter) -> bool {
    let delim_pos = scan::find_unquoted(content, delimiter.as_byte());
    let colon_pos = scan::find_unquoted(content, b':');
    match (delim_pos, colon_pos) {
        (Some(d), Some(c)) => d < c,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => true,
    }
}
