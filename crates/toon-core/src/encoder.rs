//! TOON v2.0 encoder.
//!
//! Walks a [`Value`] tree and emits TOON text, choosing the most compact
//! layout for every array it meets:
//!
//! 1. **Inline**: all elements primitive, values on the header line
//!    (`[3]: 1,2,3`)
//! 2. **Tabular**: uniform objects with primitive fields, one
//!    delimiter-separated row per object (`[2]{id,name}:`)
//! 3. **List**: everything else, one `- ` item per element
//!
//! Keys and string values are quoted only when the quoting predicate
//! demands it, and the configured delimiter is announced in each array
//! header when it is not the default comma.

use crate::options::{Delimiter, EncodeOptions};
use crate::quote::{quote_key, quote_value};
use crate::value::{Map, Value};

/// Encodes a value tree as TOON text.
///
/// The output has no trailing newline. An empty root object encodes to
/// the empty string.
///
/// # Examples
///
/// ```rust
/// use toon_core::{encode, toon, EncodeOptions};
///
/// let value = toon!({ "name": "Alice", "scores": [95, 87, 92] });
/// let text = encode(&value, &EncodeOptions::default());
/// assert_eq!(text, "name: Alice\nscores[3]: 95,87,92");
/// ```
#[must_use]
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => encode_object_entries(map, 0, options, &mut out),
        Value::Array(items) => encode_array_value(items, 0, options, &mut out),
        primitive => push_primitive(primitive, options.delimiter, &mut out),
    }
    out
}

/// Emits all entries of an object at the given depth, one per line.
fn encode_object_entries(map: &Map, depth: usize, options: &EncodeOptions, out: &mut String) {
    let indent = " ".repeat(depth * options.indent);
    let mut first = true;
    for (key, value) in map.iter() {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&indent);
        out.push_str(&quote_key(key));
        encode_entry_value(value, depth, options, out);
    }
}

/// Emits the value side of a `key: value` entry. The key is already on the
/// output; `depth` is the key's depth.
fn encode_entry_value(value: &Value, depth: usize, options: &EncodeOptions, out: &mut String) {
    match value {
        Value::Object(map) if map.is_empty() => out.push(':'),
        Value::Object(map) => {
            out.push(':');
            out.push('\n');
            encode_object_entries(map, depth + 1, options, out);
        }
        Value::Array(items) => encode_array_value(items, depth, options, out),
        primitive => {
            out.push_str(": ");
            push_primitive(primitive, options.delimiter, out);
        }
    }
}

/// Emits an array, header first, picking inline, tabular, or list layout.
/// `depth` is the depth of the header line; bodies indent one level past it.
fn encode_array_value(items: &[Value], depth: usize, options: &EncodeOptions, out: &mut String) {
    if items.is_empty() {
        push_header(0, options, out);
        out.push(':');
        return;
    }

    if let Some(fields) = tabular_fields(items) {
        push_header(items.len(), options, out);
        out.push('{');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push_str(options.delimiter.as_str());
            }
            out.push_str(&quote_key(field));
        }
        out.push_str("}:");
        let row_indent = " ".repeat((depth + 1) * options.indent);
        for item in items {
            out.push('\n');
            out.push_str(&row_indent);
            if let Value::Object(obj) = item {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(options.delimiter.as_str());
                    }
                    match obj.get(field) {
                        Some(v) => push_primitive(v, options.delimiter, out),
                        None => out.push_str("null"),
                    }
                }
            }
        }
        return;
    }

    if items.iter().all(Value::is_primitive) {
        push_header(items.len(), options, out);
        out.push_str(": ");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(options.delimiter.as_str());
            }
            push_primitive(item, options.delimiter, out);
        }
        return;
    }

    push_header(items.len(), options, out);
    out.push(':');
    encode_list_items(items, depth, options, out);
}

/// Writes `[N]` with the delimiter marker byte when it is not comma.
fn push_header(len: usize, options: &EncodeOptions, out: &mut String) {
    out.push('[');
    out.push_str(&len.to_string());
    match options.delimiter {
        Delimiter::Comma => {}
        Delimiter::Tab => out.push('\t'),
        Delimiter::Pipe => out.push('|'),
    }
    out.push(']');
}

/// Emits list layout items below a header at `depth`. Markers sit one
/// level deeper; an object item's remaining keys sit one level past the
/// marker.
fn encode_list_items(items: &[Value], depth: usize, options: &EncodeOptions, out: &mut String) {
    let item_indent = " ".repeat((depth + 1) * options.indent);
    let follow_indent = " ".repeat((depth + 2) * options.indent);
    for item in items {
        out.push('\n');
        out.push_str(&item_indent);
        match item {
            Value::Object(map) if map.is_empty() => out.push('-'),
            Value::Object(map) => {
                out.push_str("- ");
                let mut first = true;
                for (key, value) in map.iter() {
                    if !first {
                        out.push('\n');
                        out.push_str(&follow_indent);
                    }
                    first = false;
                    out.push_str(&quote_key(key));
                    encode_entry_value(value, depth + 2, options, out);
                }
            }
            Value::Array(inner) => {
                out.push_str("- ");
                encode_array_value(inner, depth + 1, options, out);
            }
            primitive => {
                out.push_str("- ");
                push_primitive(primitive, options.delimiter, out);
            }
        }
    }
}

/// Tabular test: non-empty, all items are non-empty objects with the same
/// key set and primitive-only values. Returns the column order, which is
/// the first object's key order.
fn tabular_fields(items: &[Value]) -> Option<Vec<&str>> {
    let first = items.first()?.as_object()?;
    if first.is_empty() || !first.values().all(Value::is_primitive) {
        return None;
    }
    let fields: Vec<&str> = first.keys().collect();
    for item in &items[1..] {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for field in &fields {
            match obj.get(field) {
                Some(v) if v.is_primitive() => {}
                _ => return None,
            }
        }
    }
    Some(fields)
}

/// Writes a leaf value: `null`, a boolean literal, a formatted number, or
/// a (possibly quoted) string.
fn push_primitive(value: &Value, delim: Delimiter, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => push_number(*n, out),
        Value::String(s) => out.push_str(&quote_value(s, delim)),
        // containers never reach here; layout selection filters them out
        Value::Array(_) | Value::Object(_) => out.push_str("null"),
    }
}

/// Number formatting rules:
/// - zero (either sign) prints as `0`
/// - integral values below 1e15 in magnitude print without a decimal point
/// - magnitudes at or above 1e21, or below 1e-6, print in scientific form
/// - everything else uses the shortest decimal that round-trips
fn push_number(n: f64, out: &mut String) {
    use std::fmt::Write;

    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    if n == 0.0 {
        out.push('0');
        return;
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        let _ = write!(out, "{}", n as i64);
        return;
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let _ = write!(out, "{:e}", n);
    } else {
        let _ = write!(out, "{}", n);
    }
}
