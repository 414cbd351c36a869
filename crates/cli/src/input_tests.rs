// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::{InstanceStatus, ResourceStatus};
use std::io::Write;

const EVENTS: &str = r#"{"type":"child:update","parent_instance_id":"root","child_instance_id":"c-1","child_name":"core","status":"deploying"}

{"type":"resource:update","instance_id":"c-1","resource_id":"r-1","resource_name":"vpc","status":"created"}
{"type":"deployment:finished","status":"deployed"}
"#;

#[test]
fn parses_jsonl_events_skipping_blank_lines() {
    let events = parse_events(Path::new("events.jsonl"), EVENTS.as_bytes()).unwrap();

    assert_eq!(events.len(), 3);
    let Event::ResourceUpdate(update) = &events[1] else {
        panic!("expected resource update, got {:?}", events[1]);
    };
    assert_eq!(update.status, ResourceStatus::Created);
    assert!(matches!(
        &events[2],
        Event::DeploymentFinished(finished) if finished.status == InstanceStatus::Deployed
    ));
}

#[test]
fn event_errors_report_line_number() {
    let input = "{\"type\":\"deployment:update\",\"status\":\"deploying\"}\nnot json\n";
    let err = parse_events(Path::new("events.jsonl"), input.as_bytes()).unwrap_err();

    assert!(matches!(err, InputError::Event { line: 2, .. }), "{err:?}");
    let message = err.to_string();
    assert!(message.starts_with("invalid event on line 2 of events.jsonl"));
}

#[test]
fn unknown_event_type_is_an_error() {
    let err = parse_events(Path::new("e"), "{\"type\":\"bogus\"}".as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::Event { line: 1, .. }));
}

#[test]
fn loads_change_description() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"new_resources": {{"bucket": {{"resource_type": "aws/s3/bucket"}}}}, "removed_children": ["legacy"]}}"#
    )
    .unwrap();

    let changes = load_changes(file.path()).unwrap();
    assert!(changes.new_resources.contains_key("bucket"));
    assert_eq!(changes.removed_children, vec!["legacy".to_string()]);
}

#[test]
fn invalid_snapshot_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 2").unwrap();

    let err = load_snapshot(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_events_file_is_a_read_error() {
    let err = load_events(Path::new("/nonexistent/events.jsonl")).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
}
