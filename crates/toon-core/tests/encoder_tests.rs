//! Encoder contract tests: every layout choice and quoting rule the
//! encoder makes, pinned against exact TOON output.

use toon_core::{encode, toon, Delimiter, EncodeOptions, Value};

fn enc(value: &Value) -> String {
    encode(value, &EncodeOptions::default())
}

fn enc_with(value: &Value, options: EncodeOptions) -> String {
    encode(value, &options)
}

// ============================================================================
// Root forms
// ============================================================================

#[test]
fn empty_root_object_is_empty_string() {
    assert_eq!(enc(&toon!({})), "");
}

#[test]
fn root_primitives() {
    assert_eq!(enc(&toon!(null)), "null");
    assert_eq!(enc(&toon!(true)), "true");
    assert_eq!(enc(&toon!(false)), "false");
    assert_eq!(enc(&toon!(42)), "42");
    assert_eq!(enc(&toon!(-7)), "-7");
    assert_eq!(enc(&toon!(3.14)), "3.14");
    assert_eq!(enc(&toon!("hello world")), "hello world");
}

#[test]
fn root_array_has_no_key_prefix() {
    assert_eq!(enc(&toon!(["a", "b", "c"])), "[3]: a,b,c");
}

#[test]
fn root_empty_array() {
    assert_eq!(enc(&toon!([])), "[0]:");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn simple_object() {
    assert_eq!(enc(&toon!({ "name": "Alice" })), "name: Alice");
}

#[test]
fn object_preserves_insertion_order() {
    let value = toon!({ "zebra": 1, "apple": 2 });
    assert_eq!(enc(&value), "zebra: 1\napple: 2");
}

#[test]
fn nested_object_indents_one_level() {
    let value = toon!({ "data": { "x": 42 } });
    assert_eq!(enc(&value), "data:\n  x: 42");
}

#[test]
fn deeply_nested_objects() {
    let value = toon!({ "a": { "b": { "c": 1 } } });
    assert_eq!(enc(&value), "a:\n  b:\n    c: 1");
}

#[test]
fn empty_object_value_collapses_to_bare_key() {
    assert_eq!(enc(&toon!({ "meta": {} })), "meta:");
}

#[test]
fn keys_are_quoted_when_not_bare() {
    assert_eq!(enc(&toon!({ "user-id": 7 })), "\"user-id\": 7");
    assert_eq!(enc(&toon!({ "2nd": 1 })), "\"2nd\": 1");
    assert_eq!(enc(&toon!({ "a b": 1 })), "\"a b\": 1");
    assert_eq!(enc(&toon!({ "user.email": 1 })), "user.email: 1");
}

#[test]
fn custom_indent_width() {
    let value = toon!({ "data": { "x": 1 } });
    let options = EncodeOptions::new().with_indent(4);
    assert_eq!(enc_with(&value, options), "data:\n    x: 1");
}

// ============================================================================
// Inline arrays
// ============================================================================

#[test]
fn keyed_primitive_array_is_inline() {
    let value = toon!({ "tags": ["x", "y"] });
    assert_eq!(enc(&value), "tags[2]: x,y");
}

#[test]
fn empty_array_value() {
    assert_eq!(enc(&toon!({ "items": [] })), "items[0]:");
}

#[test]
fn mixed_primitives_stay_inline() {
    let value = toon!([true, null, 1, "x"]);
    assert_eq!(enc(&value), "[4]: true,null,1,x");
}

#[test]
fn inline_values_matching_literals_are_quoted() {
    let value = toon!(["a", "true", "3", "null"]);
    assert_eq!(enc(&value), "[4]: a,\"true\",\"3\",\"null\"");
}

#[test]
fn inline_value_with_comma_is_quoted_under_comma_delimiter() {
    let value = toon!(["a,b", "c"]);
    assert_eq!(enc(&value), "[2]: \"a,b\",c");
}

// ============================================================================
// Delimiters
// ============================================================================

#[test]
fn pipe_delimiter_marks_header_and_frees_commas() {
    let value = toon!(["a,b", "c"]);
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(enc_with(&value, options), "[2|]: a,b|c");
}

#[test]
fn tab_delimiter_marks_header_with_tab_byte() {
    let value = toon!(["a", "b"]);
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(enc_with(&value, options), "[2\t]: a\tb");
}

#[test]
fn pipe_delimiter_applies_to_tabular_header_and_rows() {
    let value = toon!([
        { "id": 1, "name": "Alice" },
        { "id": 2, "name": "Bob" }
    ]);
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(
        enc_with(&value, options),
        "[2|]{id|name}:\n  1|Alice\n  2|Bob"
    );
}

// ============================================================================
// Tabular arrays
// ============================================================================

#[test]
fn uniform_object_array_is_tabular() {
    let value = toon!([
        { "id": 1, "name": "Alice" },
        { "id": 2, "name": "Bob" }
    ]);
    assert_eq!(enc(&value), "[2]{id,name}:\n  1,Alice\n  2,Bob");
}

#[test]
fn column_order_follows_first_item() {
    let value = toon!([
        { "name": "Alice", "id": 1 },
        { "id": 2, "name": "Bob" }
    ]);
    assert_eq!(enc(&value), "[2]{name,id}:\n  Alice,1\n  Bob,2");
}

#[test]
fn keyed_tabular_array() {
    let value = toon!({ "users": [{ "id": 1 }, { "id": 2 }] });
    assert_eq!(enc(&value), "users[2]{id}:\n  1\n  2");
}

#[test]
fn tabular_cells_quote_like_inline_values() {
    let value = toon!([
        { "k": "a,b" },
        { "k": "05" }
    ]);
    assert_eq!(enc(&value), "[2]{k}:\n  \"a,b\"\n  \"05\"");
}

#[test]
fn non_uniform_objects_fall_back_to_list() {
    let value = toon!([{ "a": 1 }, { "b": 2 }]);
    assert_eq!(enc(&value), "[2]:\n  - a: 1\n  - b: 2");
}

#[test]
fn nested_values_disqualify_tabular() {
    let value = toon!([{ "a": { "x": 1 } }, { "a": { "x": 2 } }]);
    assert_eq!(enc(&value), "[2]:\n  - a:\n      x: 1\n  - a:\n      x: 2");
}

#[test]
fn empty_objects_disqualify_tabular() {
    let value = toon!([{}, {}]);
    assert_eq!(enc(&value), "[2]:\n  -\n  -");
}

// ============================================================================
// List arrays
// ============================================================================

#[test]
fn mixed_array_uses_list_layout() {
    let value = toon!([1, [2, 3], { "a": 1 }]);
    assert_eq!(enc(&value), "[3]:\n  - 1\n  - [2]: 2,3\n  - a: 1");
}

#[test]
fn list_object_item_spreads_following_keys() {
    let value = toon!([
        { "name": "Alice", "role": "admin" },
        { "name": "Bob", "extra": { "x": 1 } }
    ]);
    assert_eq!(
        enc(&value),
        "[2]:\n  - name: Alice\n    role: admin\n  - name: Bob\n    extra:\n      x: 1"
    );
}

#[test]
fn list_item_with_nested_array_value() {
    let value = toon!([{ "name": "Alice", "tags": ["x", "y"] }]);
    assert_eq!(enc(&value), "[1]:\n  - name: Alice\n    tags[2]: x,y");
}

#[test]
fn array_of_arrays() {
    let value = toon!([[1, 2], [3, 4]]);
    assert_eq!(enc(&value), "[2]:\n  - [2]: 1,2\n  - [2]: 3,4");
}

#[test]
fn nested_list_arrays() {
    let value = toon!([[{ "a": 1 }, 2]]);
    assert_eq!(enc(&value), "[1]:\n  - [2]:\n    - a: 1\n    - 2");
}

// ============================================================================
// Primitive serialization
// ============================================================================

#[test]
fn non_finite_numbers_become_null() {
    assert_eq!(enc(&Value::Number(f64::NAN)), "null");
    assert_eq!(enc(&Value::Number(f64::INFINITY)), "null");
    assert_eq!(enc(&Value::Number(f64::NEG_INFINITY)), "null");
}

#[test]
fn integral_floats_print_without_decimal_point() {
    assert_eq!(enc(&toon!(1.0)), "1");
    assert_eq!(enc(&toon!(-0.0)), "0");
    assert_eq!(enc(&toon!(1e6)), "1000000");
}

#[test]
fn extreme_magnitudes_print_in_scientific_form() {
    assert_eq!(enc(&toon!(1e22)), "1e22");
    assert_eq!(enc(&toon!(2.5e-7)), "2.5e-7");
}

#[test]
fn strings_with_escapables_are_quoted_and_escaped() {
    assert_eq!(enc(&toon!("line1\nline2")), "\"line1\\nline2\"");
    assert_eq!(enc(&toon!("say \"hi\"")), "\"say \\\"hi\\\"\"");
    assert_eq!(enc(&toon!("back\\slash")), "\"back\\\\slash\"");
    assert_eq!(enc(&toon!("")), "\"\"");
    assert_eq!(enc(&toon!(" padded ")), "\" padded \"");
    assert_eq!(enc(&toon!("-dash")), "\"-dash\"");
}

#[test]
fn no_trailing_newline_or_trailing_spaces() {
    let value = toon!({
        "users": [{ "id": 1 }, { "id": 2 }],
        "empty": {},
        "list": [1, [2]]
    });
    let text = enc(&value);
    assert!(!text.ends_with('\n'));
    for line in text.lines() {
        assert!(!line.ends_with(' '), "trailing space in {line:?}");
    }
}
