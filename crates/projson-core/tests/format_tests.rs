use projson_core::{format, minify, ProJsonError};

/// Helper: parse two JSON strings and compare them structurally.
fn assert_json_eq(actual: &str, expected: &str) {
    let va: serde_json::Value = serde_json::from_str(actual).unwrap();
    let vb: serde_json::Value = serde_json::from_str(expected).unwrap();
    assert_eq!(va, vb, "JSON mismatch:\n  actual:   {actual}\n  expected: {expected}");
}

// ============================================================================
// format
// ============================================================================

#[test]
fn format_uses_two_space_indent() {
    let pretty = format(r#"{"a":1,"b":[1,2]}"#).unwrap();
    assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn format_preserves_key_order() {
    let pretty = format(r#"{"zebra":1,"apple":2,"mango":3}"#).unwrap();
    let z = pretty.find("zebra").unwrap();
    let a = pretty.find("apple").unwrap();
    let m = pretty.find("mango").unwrap();
    assert!(z < a && a < m, "keys must stay in insertion order: {pretty}");
}

#[test]
fn format_root_primitives() {
    assert_eq!(format("null").unwrap(), "null");
    assert_eq!(format("42").unwrap(), "42");
    assert_eq!(format(r#""hi""#).unwrap(), "\"hi\"");
}

#[test]
fn format_empty_object_and_array() {
    assert_eq!(format("{}").unwrap(), "{}");
    assert_eq!(format("[]").unwrap(), "[]");
}

#[test]
fn format_rejects_invalid_json() {
    let err = format(r#"{"a":}"#).unwrap_err();
    assert!(matches!(err, ProJsonError::Parse(_)));
}

// ============================================================================
// minify
// ============================================================================

#[test]
fn minify_strips_whitespace() {
    let minified = minify("{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}").unwrap();
    assert_eq!(minified, r#"{"a":1,"b":[1,2]}"#);
}

#[test]
fn minify_preserves_string_contents() {
    let minified = minify(r#"{ "text": "spaces  and\nnewlines stay" }"#).unwrap();
    assert_eq!(minified, r#"{"text":"spaces  and\nnewlines stay"}"#);
}

#[test]
fn minify_rejects_invalid_json() {
    let err = minify("[1, 2,").unwrap_err();
    assert!(matches!(err, ProJsonError::Parse(_)));
}

// ============================================================================
// Round-trips (the operations are serializer passthroughs)
// ============================================================================

#[test]
fn format_then_minify_round_trips() {
    let input = r#"{"name":"Alice","scores":[95,87,92],"active":true,"meta":null}"#;
    let pretty = format(input).unwrap();
    let minified = minify(&pretty).unwrap();
    assert_json_eq(&minified, input);
}

#[test]
fn format_is_a_fixed_point() {
    let input = r#"{"nested":{"deep":{"deeper":[1,{"x":"y"}]}}}"#;
    let once = format(input).unwrap();
    let twice = format(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn minify_is_a_fixed_point() {
    let input = r#"  [ 1 , 2 , { "k" : "v" } ]  "#;
    let once = minify(input).unwrap();
    let twice = minify(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn unicode_survives_both_operations() {
    let input = r#"{"greeting":"你好","accent":"café"}"#;
    let pretty = format(input).unwrap();
    assert_json_eq(&pretty, input);
    let minified = minify(&pretty).unwrap();
    assert_json_eq(&minified, input);
}
