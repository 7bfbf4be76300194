//! # toon-core
//!
//! Pure-Rust encoder and decoder for **TOON (Token-Oriented Object
//! Notation)** v2.0.
//!
//! TOON is a compact, indentation-structured text format designed to cut
//! LLM token consumption on structured data. It borrows indentation from
//! YAML and delimited rows from CSV, and every array opens with an
//! explicit length-and-shape header, so uniform data compresses into
//! CSV-like tables while staying human-readable.
//!
//! ## Quick start
//!
//! ```rust
//! use toon_core::{decode, encode, toon, DecodeOptions, EncodeOptions};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "scores": [95, 87, 92]
//! });
//!
//! let text = encode(&value, &EncodeOptions::default());
//! assert_eq!(text, "name: Alice\nscores[3]: 95,87,92");
//!
//! let back = decode(&text, &DecodeOptions::default()).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! Uniform arrays of flat objects get the tabular layout:
//!
//! ```rust
//! use toon_core::{encode, toon, EncodeOptions};
//!
//! let users = toon!([
//!     { "id": 1, "name": "Alice" },
//!     { "id": 2, "name": "Bob" }
//! ]);
//! let text = encode(&users, &EncodeOptions::default());
//! assert_eq!(text, "[2]{id,name}:\n  1,Alice\n  2,Bob");
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — [`Value`] tree to TOON text
//! - [`decoder`] — TOON text to [`Value`] tree, with strict shape checks
//! - [`de`] — bind decoded values onto native types via serde
//! - [`value`] — the [`Value`] tree and its ordered [`Map`]
//! - [`quote`] — quoting predicates and escape handling
//! - [`options`] — encode and decode configuration
//! - [`error`] — the error kinds for decode and binding failures

pub mod de;
pub mod decoder;
pub mod encoder;
pub mod error;
mod header;
mod macros;
pub mod options;
pub mod quote;
mod scan;
pub mod value;

pub use de::{decode_into, from_value};
pub use decoder::decode;
pub use encoder::encode;
pub use error::{Error, Result};
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use value::{Map, Value};
