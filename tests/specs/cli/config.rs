//! Settings precedence specs: flag > environment > dw.toml > default.

use crate::prelude::*;

const SOURCES: &[&str] = &[
    "summary",
    "--changes",
    "changes.json",
    "--events",
    "events.jsonl",
];

#[test]
fn config_file_selects_json() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project.file("dw.toml", "output = \"json\"\n");
    let run = project.dw().args(SOURCES).passes();
    assert_eq!(run.stdout_json()["status"], "deployed");
}

#[test]
fn environment_beats_config_file() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project.file("dw.toml", "output = \"json\"\n");
    project
        .dw()
        .env("DW_OUTPUT", "text")
        .args(SOURCES)
        .passes()
        .stdout_has("Successful (4)");
}

#[test]
fn flag_beats_environment() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    let run = project
        .dw()
        .env("DW_OUTPUT", "text")
        .args(&["-o", "json"])
        .args(SOURCES)
        .passes();
    assert_eq!(run.stdout_json()["finished"], true);
}

#[test]
fn explicit_config_path() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project.file("custom.toml", "output = \"json\"\n");
    let run = project
        .dw()
        .args(&["--config", "custom.toml"])
        .args(SOURCES)
        .passes();
    assert!(run.stdout_json()["successful"].is_array());
}

#[test]
fn unknown_config_key_is_an_input_error() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project.file("dw.toml", "colour = true\n");
    project
        .dw()
        .args(SOURCES)
        .fails_with(3)
        .stderr_has("invalid config");
}

#[test]
fn invalid_output_env_is_an_input_error() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project
        .dw()
        .env("DW_OUTPUT", "yaml")
        .args(SOURCES)
        .fails_with(3)
        .stderr_has("DW_OUTPUT");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project
        .dw()
        .args(&["--log", "debug"])
        .args(SOURCES)
        .passes()
        .stdout_has("Successful (4)")
        .stderr_has("applying event");
}
