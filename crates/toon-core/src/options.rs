//! Configuration for encoding and decoding.
//!
//! - [`EncodeOptions`]: indent width and delimiter choice
//! - [`DecodeOptions`]: indent width and strict flag
//! - [`Delimiter`]: the separator used between inline values, tabular
//!   header fields, and row cells

/// Delimiter used between array values and tabular cells.
///
/// Non-comma delimiters are announced in the array header by a trailing
/// byte inside the brackets: `[3|]` for pipe, `[3\t]` for tab. Comma is
/// the default and carries no marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// The delimiter as a single byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
        }
    }

    /// The delimiter as a string slice, for splicing into output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Options controlling [`encode`](crate::encode) output.
///
/// # Examples
///
/// ```rust
/// use toon_core::{Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Pipe);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Separator for inline values, header fields, and row cells.
    pub delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
        }
    }
}

impl EncodeOptions {
    /// Default options: 2-space indent, comma delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options controlling [`decode`](crate::decode) behavior.
///
/// Strict mode (the default) rejects shape anomalies that lenient decoding
/// silently accepts: count and width mismatches against array headers, odd
/// indentation, missing `:` separators, and blank lines inside array bodies.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Whether shape violations are errors.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    /// Default options: 2-space indent, strict mode on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables strict shape validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
