//! Integration tests for the `toon` CLI binary.
//!
//! Exercises the encode, decode, and validate subcommands through the
//! actual binary, including stdin/stdout piping, option flags, exit
//! codes, and roundtrip correctness.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn toon_cmd() -> Command {
    Command::cargo_bin("toon").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_stdin_to_stdout() {
    toon_cmd()
        .arg("encode")
        .write_stdin(r#"{"name":"Alice","age":30}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Alice"))
        .stdout(predicate::str::contains("age: 30"));
}

#[test]
fn encode_produces_tabular_layout() {
    toon_cmd()
        .arg("encode")
        .write_stdin(r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[2]{id,name}:"))
        .stdout(predicate::str::contains("1,Alice"))
        .stdout(predicate::str::contains("2,Bob"));
}

#[test]
fn encode_with_pipe_delimiter() {
    toon_cmd()
        .args(["encode", "--delimiter", "pipe"])
        .write_stdin(r#"{"tags":["a","b"]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("tags[2|]: a|b"));
}

#[test]
fn encode_with_custom_indent() {
    toon_cmd()
        .args(["encode", "--indent", "4"])
        .write_stdin(r#"{"data":{"x":1}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("data:\n    x: 1"));
}

#[test]
fn encode_invalid_json_fails() {
    toon_cmd()
        .arg("encode")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn encode_file_to_file() {
    let dir = std::env::temp_dir();
    let input = dir.join("toon-cli-test-input.json");
    let output = dir.join("toon-cli-test-output.toon");
    std::fs::write(&input, r#"{"name":"Alice"}"#).unwrap();
    let _ = std::fs::remove_file(&output);

    toon_cmd()
        .args([
            "encode",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).expect("output file must exist");
    assert_eq!(content, "name: Alice");

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_stdin_to_stdout() {
    toon_cmd()
        .arg("decode")
        .write_stdin("name: Alice\nage: 30")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alice\""))
        .stdout(predicate::str::contains("\"age\": 30"));
}

#[test]
fn decode_invalid_toon_fails() {
    toon_cmd()
        .arg("decode")
        .write_stdin("[3]: 1,2")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to decode TOON"));
}

#[test]
fn decode_lenient_accepts_count_mismatch() {
    toon_cmd()
        .args(["decode", "--lenient"])
        .write_stdin("[3]: 1,2")
        .assert()
        .success()
        .stdout(predicate::str::contains("1"))
        .stdout(predicate::str::contains("2"));
}

#[test]
fn roundtrip_encode_decode_pipeline() {
    let input_json = r#"{"users":[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}],"total":2}"#;

    let encode_output = toon_cmd()
        .arg("encode")
        .write_stdin(input_json)
        .output()
        .expect("encode should run");
    assert!(encode_output.status.success(), "encode must succeed");
    let toon = String::from_utf8(encode_output.stdout).expect("TOON should be valid UTF-8");

    let decode_output = toon_cmd()
        .arg("decode")
        .write_stdin(toon)
        .output()
        .expect("decode should run");
    assert!(decode_output.status.success(), "decode must succeed");
    let result_json = String::from_utf8(decode_output.stdout).expect("JSON should be valid UTF-8");

    let original: serde_json::Value = serde_json::from_str(input_json).unwrap();
    let roundtripped: serde_json::Value = serde_json::from_str(&result_json).unwrap();
    assert_eq!(original, roundtripped);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_well_formed_input_succeeds_silently() {
    toon_cmd()
        .arg("validate")
        .write_stdin("users[2]{id}:\n  1\n  2")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn validate_rejects_count_mismatch() {
    toon_cmd()
        .arg("validate")
        .write_stdin("users[3]{id}:\n  1\n  2")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid TOON"));
}

#[test]
fn validate_rejects_bad_indentation() {
    toon_cmd()
        .arg("validate")
        .write_stdin("a:\n   b: 1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("indentation"));
}

// ─────────────────────────────────────────────────────────────────────────────
// CLI surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    toon_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn unknown_subcommand_fails() {
    toon_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized").or(predicate::str::contains("error")));
}
