//! `dw summary` specs: outcome lists and exit codes.

use crate::prelude::*;

const SOURCES: &[&str] = &[
    "summary",
    "--changes",
    "changes.json",
    "--events",
    "events.jsonl",
];

#[test]
fn successful_deployment_lists_every_element() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project.dw().args(SOURCES).passes().stdout_eq(
        "Deployment: deployed\n\
         Successful (4)\n\
         \x20 resources.bucket  created\n\
         \x20 children.core  deployed\n\
         \x20 children.core::resources.vpc  created\n\
         \x20 children.core::resources.subnet  created\n",
    );
}

#[test]
fn failed_element_exits_one_with_reasons() {
    let project = Project::with_events(EVENTS_FAILED);
    project
        .dw()
        .args(SOURCES)
        .fails_with(1)
        .stdout_has("Deployment: deploy failed")
        .stdout_has("  core failed")
        .stdout_has("Failed (1)\n  children.core::resources.vpc\n    - quota exceeded")
        .stdout_has("children.core::resources.subnet")
        .stderr_has("1 element failed");
}

#[test]
fn interruption_without_failure_exits_two() {
    let project = Project::with_events(EVENTS_INTERRUPTED);
    project
        .dw()
        .args(SOURCES)
        .fails_with(2)
        .stdout_has("Interrupted (1)\n  resources.bucket")
        .stdout_lacks("Failed")
        .stderr_has("1 element interrupted");
}

#[test]
fn json_output_carries_all_lists() {
    let project = Project::with_events(EVENTS_FAILED);
    let run = project
        .dw()
        .args(&["--output", "json"])
        .args(SOURCES)
        .fails_with(1);
    let report = run.stdout_json();

    assert_eq!(report["status"], "deploy_failed");
    assert_eq!(report["finished"], true);
    assert_eq!(report["successful"][0]["path"], "resources.bucket");
    assert_eq!(report["failed"][0]["path"], "children.core::resources.vpc");
    assert_eq!(report["failed"][0]["failure_reasons"][0], "quota exceeded");
    assert!(report["skipped"].is_array());
}

#[test]
fn events_from_stdin() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project
        .dw()
        .args(&["summary", "--changes", "changes.json", "--events", "-"])
        .stdin(EVENTS_DEPLOYED)
        .passes()
        .stdout_has("Successful (4)");
}

#[test]
fn bad_event_line_is_an_input_error() {
    let events = "{\"type\":\"deployment:update\",\"status\":\"deploying\"}\n{oops\n";
    let project = Project::with_events(events);
    project
        .dw()
        .args(SOURCES)
        .fails_with(3)
        .stderr_has("invalid event on line 2 of events.jsonl");
}

#[test]
fn missing_changes_file_is_an_input_error() {
    let project = Project::empty();
    project
        .dw()
        .args(&["summary", "--changes", "nope.json"])
        .fails_with(3)
        .stderr_has("cannot read nope.json");
}

#[test]
fn events_before_any_changes_still_summarize() {
    let project = Project::empty();
    project.file("events.jsonl", EVENTS_DEPLOYED);
    project
        .dw()
        .args(&["summary", "--events", "events.jsonl"])
        .passes()
        .stdout_has("children.core::resources.vpc  created");
}
