//! `toon` CLI — encode, decode, and validate TOON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to TOON (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | toon encode
//!
//! # Encode with a pipe delimiter and 4-space indent
//! toon encode --delimiter pipe --indent 4 -i data.json
//!
//! # Decode TOON back to pretty-printed JSON
//! toon decode -i data.toon
//!
//! # Check a TOON document in strict mode (exit 0 when well-formed)
//! toon validate < data.toon
//! ```
//!
//! Exit code is 0 on success and 1 on any parse failure, with a
//! diagnostic on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::process;
use toon_core::{DecodeOptions, Delimiter, EncodeOptions, Map, Value};

#[derive(Parser)]
#[command(
    name = "toon",
    version,
    about = "TOON (Token-Oriented Object Notation) CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to TOON format
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Delimiter between array values and tabular cells
        #[arg(long, value_enum, default_value_t = DelimiterArg::Comma)]
        delimiter: DelimiterArg,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Decode TOON back to JSON format
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Accept loose indentation and shape mismatches
        #[arg(long)]
        lenient: bool,
    },
    /// Parse TOON in strict mode without producing output
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    Comma,
    Tab,
    Pipe,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Pipe => Delimiter::Pipe,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            delimiter,
            indent,
        } => {
            let json = read_input(input.as_deref())?;
            let parsed: serde_json::Value =
                serde_json::from_str(&json).context("input is not valid JSON")?;
            let options = EncodeOptions::new()
                .with_indent(indent)
                .with_delimiter(delimiter.into());
            let toon = toon_core::encode(&json_to_value(parsed), &options);
            write_output(output.as_deref(), &toon)?;
        }
        Commands::Decode {
            input,
            output,
            indent,
            lenient,
        } => {
            let toon = read_input(input.as_deref())?;
            let options = DecodeOptions::new()
                .with_indent(indent)
                .with_strict(!lenient);
            let value = toon_core::decode(&toon, &options).context("failed to decode TOON")?;
            let json = serde_json::to_string_pretty(&value_to_json(value))?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Validate { input, indent } => {
            let toon = read_input(input.as_deref())?;
            let options = DecodeOptions::new().with_indent(indent);
            toon_core::decode(&toon, &options).context("invalid TOON")?;
        }
    }

    Ok(())
}

/// JSON bridge, encode direction. `serde_json` is built with
/// `preserve_order`, so object entry order survives the conversion.
fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key, json_to_value(val));
            }
            Value::Object(out)
        }
    }
}

/// JSON bridge, decode direction. Whole numbers in i64 range come out as
/// JSON integers so decoded documents read naturally.
fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Number(n) => {
            if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
                serde_json::Value::Number((n as i64).into())
            } else {
                serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
        Value::String(s) => serde_json::Value::String(s),
        Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(value_to_json).collect())
        }
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key, value_to_json(val));
            }
            serde_json::Value::Object(out)
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
