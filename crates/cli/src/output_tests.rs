// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use serial_test::serial;

use super::{render, section, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct FakeEntry {
    name: String,
}

#[test]
fn render_json_uses_serialized_data() {
    let entry = FakeEntry { name: "a".into() };
    let out = render(OutputFormat::Json, &entry, || unreachable!()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["name"], "a");
}

#[test]
fn render_text_uses_text_fn() {
    let entry = FakeEntry { name: "a".into() };
    let out = render(OutputFormat::Text, &entry, || "plain".to_string()).unwrap();
    assert_eq!(out, "plain");
}

#[test]
#[serial]
fn section_lists_items_with_count() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
    let mut out = String::new();
    section(&mut out, "Failed", &["a", "b"], |s| s.to_string());
    assert_eq!(out, "Failed (2)\n  a\n  b\n");
}

#[test]
fn empty_section_renders_nothing() {
    let mut out = String::new();
    section::<&str>(&mut out, "Failed", &[], |s| s.to_string());
    assert!(out.is_empty());
}

#[test]
fn output_format_deserializes_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        output: OutputFormat,
    }
    let w: Wrapper = toml::from_str("output = \"json\"").unwrap();
    assert_eq!(w.output, OutputFormat::Json);
}
