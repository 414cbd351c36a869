// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn unconfigured() -> Tracker {
    Tracker::new(TrackerConfig::default())
}

#[test]
fn planned_root_element_teaches_the_root() {
    let mut tracker = unconfigured();
    tracker.seed(&new_resources(&["bucket"]), None);

    let event = resource_event("root-inst", "bucket", ResourceStatus::Created);
    tracker.apply_event(&event);
    let event = resource_event("root-inst", "table", ResourceStatus::Created);
    tracker.apply_event(&event);
    tracker.apply_event(&deployment_event(InstanceStatus::Deployed));

    assert_eq!(
        tracker.root_instance_id().map(|id| id.as_str()),
        Some("root-inst")
    );
    assert_eq!(tracker.resources().len(), 2);
    let resources = tracker.resources();
    assert!(resources.iter().all(|(path, _)| !path.contains('#')));
    assert_eq!(
        resource(&tracker, "bucket").status,
        Some(ResourceStatus::Created)
    );
    assert_eq!(
        resource(&tracker, "bucket").action,
        Some(ItemAction::Create)
    );
    assert!(!resource(&tracker, "table").provisional);
    assert_eq!(
        tracker.top_level_keys(),
        &[ItemKey::resource("bucket"), ItemKey::resource("table")]
    );
}

#[test]
fn earlier_unplanned_element_anchors_once_root_is_learned() {
    let mut tracker = unconfigured();
    tracker.seed(&new_resources(&["bucket"]), None);

    let event = resource_event("root-inst", "table", ResourceStatus::Creating);
    tracker.apply_event(&event);
    assert!(resource(&tracker, "table").provisional);
    assert_eq!(tracker.top_level_keys(), &[ItemKey::resource("bucket")]);

    let event = resource_event("root-inst", "bucket", ResourceStatus::Creating);
    tracker.apply_event(&event);

    assert!(!resource(&tracker, "table").provisional);
    assert_eq!(tracker.resources().len(), 2);
    let top_level = tracker.top_level_keys();
    assert!(top_level.contains(&ItemKey::resource("table")));
}

#[test]
fn planned_child_teaches_the_root() {
    let mut tracker = unconfigured();
    tracker.seed(&nested_changes(), None);

    let event = child_event("root-inst", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&resource_event("c-1", "vpc", ResourceStatus::Created));

    assert_eq!(
        tracker.root_instance_id().map(|id| id.as_str()),
        Some("root-inst")
    );
    assert_eq!(
        child(&tracker, "core").status,
        Some(InstanceStatus::Deploying)
    );
    assert_eq!(
        resource(&tracker, "core/vpc").status,
        Some(ResourceStatus::Created)
    );
    assert_eq!(tracker.children().len(), 2);
    let children = tracker.children();
    assert!(children.iter().all(|(path, _)| !path.contains('#')));
}

#[test]
fn unplanned_element_does_not_pick_a_root() {
    let mut tracker = unconfigured();
    let event = resource_event("some-inst", "bucket", ResourceStatus::Creating);
    tracker.apply_event(&event);

    assert!(tracker.root_instance_id().is_none());
    assert!(resource(&tracker, "bucket").provisional);
    assert!(tracker.top_level_keys().is_empty());
}

#[test]
fn configured_root_is_never_replaced() {
    let mut tracker = tracker();
    tracker.seed(&new_resources(&["bucket"]), None);
    let event = resource_event("other-inst", "bucket", ResourceStatus::Created);
    tracker.apply_event(&event);

    assert_eq!(
        tracker.root_instance_id().map(|id| id.as_str()),
        Some("root")
    );
    assert_eq!(resource(&tracker, "bucket").status, None);
    assert!(tracker.resources().contains("bucket#other-inst"));
}
