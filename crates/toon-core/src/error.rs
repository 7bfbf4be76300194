//! Error types for TOON encoding, decoding, and value binding.

use std::fmt;
use thiserror::Error;

/// Errors produced while decoding TOON text or binding a decoded [`Value`]
/// onto a native type.
///
/// Decode-side variants carry the 1-based source line where the problem was
/// detected. Encoding cannot fail: the only way an encode could go wrong is
/// memory exhaustion, which the global allocator turns into an abort.
///
/// [`Value`]: crate::Value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A line could not be classified as any TOON construct.
    #[error("syntax error at line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// A key-value line has no unquoted `:` separator (strict mode only;
    /// lenient decoding skips the line instead).
    #[error("missing ':' separator at line {line}")]
    MissingColon { line: usize },

    /// An array header is structurally malformed (missing bracket or brace).
    #[error("malformed array header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },

    /// The length inside an array header's brackets is empty or not a
    /// non-negative decimal integer.
    #[error("invalid array length at line {line}")]
    InvalidLength { line: usize },

    /// The number of rows, items, or inline values does not match the length
    /// declared in the array header (strict mode only).
    #[error("array at line {line} declares {expected} items but has {found}")]
    CountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row has a different number of cells than the header's field
    /// list (strict mode only).
    #[error("row at line {line} has {found} cells, header declares {expected}")]
    WidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The indentation prefix contains a tab or is not a multiple of the
    /// configured indent width (strict mode only).
    #[error("invalid indentation at line {line}: {message}")]
    InvalidIndentation { line: usize, message: String },

    /// A quoted string contains an escape sequence other than the five
    /// recognized ones, or ends in a lone backslash.
    #[error("invalid escape sequence at line {line}")]
    InvalidEscape { line: usize },

    /// A quoted string has no closing `"`.
    #[error("unterminated quoted string at line {line}")]
    UnterminatedString { line: usize },

    /// A blank line appears between the rows or items of an array body
    /// (strict mode only).
    #[error("blank line inside array body at line {line}")]
    BlankLineInArray { line: usize },

    /// A decoded value has the wrong shape for the requested native type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A decoded array cannot fill a fixed-size native sequence.
    #[error("array size mismatch: expected {expected}, found {found} elements")]
    ArraySizeMismatch { expected: String, found: usize },

    /// A struct field is absent from the decoded object and has no default.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A string does not name any variant of the target enum.
    #[error("invalid enum value `{0}`")]
    InvalidEnumValue(String),

    /// The key of a single-entry object does not name any variant of the
    /// target union type.
    #[error("invalid union tag `{0}`")]
    InvalidUnionTag(String),

    /// The target type asks for a representation TOON values cannot provide.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// Free-form binding error reported through `serde::de::Error::custom`.
    #[error("{0}")]
    Message(String),
}

/// Convenience alias used throughout toon-core.
pub type Result<T> = std::result::Result<T, Error>;

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    fn invalid_type(unexp: serde::de::Unexpected, exp: &dyn serde::de::Expected) -> Self {
        Error::TypeMismatch {
            expected: exp.to_string(),
            found: unexp.to_string(),
        }
    }

    fn invalid_length(len: usize, exp: &dyn serde::de::Expected) -> Self {
        Error::ArraySizeMismatch {
            expected: exp.to_string(),
            found: len,
        }
    }

    fn unknown_variant(variant: &str, _expected: &'static [&'static str]) -> Self {
        Error::InvalidEnumValue(variant.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Error::MissingField(field)
    }
}
