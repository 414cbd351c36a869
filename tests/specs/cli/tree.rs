//! `dw tree` specs: hierarchical view with children expanded.

use crate::prelude::*;

const SOURCES: &[&str] = &["--changes", "changes.json", "--events", "events.jsonl"];

const SNAPSHOT: &str = r#"{
  "instance_id": "root",
  "resource_ids": { "bucket": "r-1" },
  "resources": {
    "r-1": { "resource_id": "r-1", "name": "bucket", "type": "aws/s3/bucket", "status": "created" }
  },
  "child_blueprints": {
    "core": {
      "instance_id": "c-1",
      "resource_ids": { "vpc": "r-2" },
      "resources": {
        "r-2": { "resource_id": "r-2", "name": "vpc", "type": "aws/ec2/vpc", "status": "created" }
      }
    }
  }
}"#;

#[test]
fn tree_nests_child_contents() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    project
        .dw()
        .args(&["tree"])
        .args(SOURCES)
        .passes()
        .stdout_eq(
            "resource bucket  created [create]\n\
             child core  deployed [create]\n\
             \x20 resource vpc  created [create]\n\
             \x20 resource subnet  created [create]\n",
        );
}

#[test]
fn tree_before_events_shows_plan() {
    let project = Project::with_events("");
    project
        .dw()
        .args(&["tree", "--changes", "changes.json"])
        .passes()
        .stdout_has("child core  pending [create]")
        .stdout_has("  resource vpc  pending [create]");
}

#[test]
fn tree_json_is_nested() {
    let project = Project::with_events(EVENTS_DEPLOYED);
    let run = project
        .dw()
        .args(&["-o", "json", "tree"])
        .args(SOURCES)
        .passes();
    let nodes = run.stdout_json();

    assert_eq!(nodes[1]["name"], "core");
    assert_eq!(nodes[1]["children"][0]["path"], "core/vpc");
    assert_eq!(nodes[1]["children"][0]["status"], "created");
}

#[test]
fn inspect_shows_existing_deployment() {
    let project = Project::empty();
    project.file("state.json", SNAPSHOT);
    project
        .dw()
        .args(&["tree", "--inspect", "--snapshot", "state.json"])
        .passes()
        .stdout_has("resource bucket  created [inspect]")
        .stdout_has("  resource vpc  created [inspect]");
}

#[test]
fn inspect_without_snapshot_is_an_input_error() {
    cli()
        .args(&["tree", "--inspect"])
        .fails_with(3)
        .stderr_has("--inspect requires --snapshot");
}
