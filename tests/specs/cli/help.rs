//! CLI help output specs

use crate::prelude::*;

#[test]
fn dw_no_args_shows_usage() {
    cli().fails_with(2).stderr_has("Usage:");
}

#[test]
fn dw_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("summary")
        .stdout_has("tree");
}

#[test]
fn dw_summary_help_shows_sources() {
    cli()
        .args(&["summary", "--help"])
        .passes()
        .stdout_has("--changes")
        .stdout_has("--snapshot")
        .stdout_has("--events");
}

#[test]
fn dw_tree_help_shows_inspect() {
    cli()
        .args(&["tree", "--help"])
        .passes()
        .stdout_has("--inspect");
}

#[test]
fn dw_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
