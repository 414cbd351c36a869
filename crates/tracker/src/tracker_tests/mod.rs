// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod children;
mod deployment;
mod idempotency;
mod links;
mod ordering;
mod resources;
mod root;

use super::*;
pub(super) use dw_core::test_support::{
    child_event, deployment_event, finished_event, link_event, new_resources, resource_event,
    resource_failed_event, snapshot,
};
pub(super) use dw_core::{
    BlueprintChanges, ChildItem, InstanceStatus, ItemAction, ItemKey, LinkStatus, ResourceItem,
    ResourceStatus, StatusCategory, TrackedItem,
};

fn tracker() -> Tracker {
    Tracker::new(TrackerConfig {
        instance_id: Some("root".into()),
    })
}

/// Change description: root child `core` with nested child `net` holding `subnet`.
fn nested_changes() -> BlueprintChanges {
    let mut core = new_resources(&["vpc"]);
    core.new_children
        .insert("net".to_string(), new_resources(&["subnet"]));
    let mut changes = new_resources(&["bucket"]);
    changes.new_children.insert("core".to_string(), core);
    changes
}

fn resource<'a>(tracker: &'a Tracker, path: &str) -> &'a ResourceItem {
    match tracker.resources().get(path) {
        Some(item) => item,
        None => panic!("no resource at {path}"),
    }
}

fn child<'a>(tracker: &'a Tracker, path: &str) -> &'a ChildItem {
    match tracker.children().get(path) {
        Some(item) => item,
        None => panic!("no child at {path}"),
    }
}
