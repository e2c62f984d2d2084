//! Tests for the serialized output format

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

use jsoncat::{collect_records, write_array, CollectorOptions, DEFAULT_INDENT};

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut f = File::create(dir.join(name)).unwrap();
    write!(f, "{}", content).unwrap();
}

#[test]
fn test_output_is_indented_with_four_spaces() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("out.json");
    write_array(
        &[json!({"name": "Alice", "id": 1})],
        &out,
        DEFAULT_INDENT,
    )
    .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "[\n    {\n        \"name\": \"Alice\",\n        \"id\": 1\n    }\n]"
    );
}

#[test]
fn test_round_trip_matches_in_memory_aggregate() {
    let input = tempdir().unwrap();
    write_file(input.path(), "a.json", r#"{"x": 1}"#);
    write_file(input.path(), "b.json", r#"["héllo", "世界"]"#);
    write_file(input.path(), "c.json", "3.25");

    let outcome = collect_records(input.path(), &CollectorOptions::default()).unwrap();

    let out = input.path().join("out/combined.json");
    write_array(&outcome.records, &out, DEFAULT_INDENT).unwrap();

    let reparsed: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(reparsed, outcome.records);
}

#[test]
fn test_object_key_order_survives_the_round_trip() {
    let input = tempdir().unwrap();
    write_file(input.path(), "ordered.json", r#"{"zulu": 1, "alpha": 2}"#);

    let outcome = collect_records(input.path(), &CollectorOptions::default()).unwrap();
    let out = input.path().join("combined.json");
    write_array(&outcome.records, &out, DEFAULT_INDENT).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let zulu = content.find("zulu").unwrap();
    let alpha = content.find("alpha").unwrap();
    assert!(zulu < alpha, "keys were reordered: {}", content);
}

#[test]
fn test_non_ascii_written_literally() {
    let input = tempdir().unwrap();
    write_file(input.path(), "unicode.json", r#"{"标题": "数据挖掘", "café": "naïve"}"#);

    let outcome = collect_records(input.path(), &CollectorOptions::default()).unwrap();
    let out = input.path().join("combined.json");
    write_array(&outcome.records, &out, DEFAULT_INDENT).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("数据挖掘"), "got: {}", content);
    assert!(content.contains("naïve"), "got: {}", content);
    assert!(!content.contains("\\u"), "found escapes: {}", content);
}
