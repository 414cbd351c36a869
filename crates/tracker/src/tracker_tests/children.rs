// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::Event;

#[test]
fn child_event_records_identity() {
    let mut tracker = tracker();
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);

    let item = child(&tracker, "core");
    assert_eq!(
        item.child_instance_id.as_ref().map(|id| id.as_str()),
        Some("c-1")
    );
    assert_eq!(
        item.parent_instance_id.as_ref().map(|id| id.as_str()),
        Some("root")
    );
    assert_eq!(item.status, Some(InstanceStatus::Deploying));
    assert_eq!(tracker.top_level_keys(), &[ItemKey::child("core")]);
}

#[test]
fn nested_events_before_parent_identity_are_reanchored() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("c-2", "subnet", ResourceStatus::Creating));
    assert!(resource(&tracker, "subnet").provisional);
    assert!(tracker.top_level_keys().is_empty());

    tracker.apply_event(&child_event("c-1", "c-2", "net", InstanceStatus::Deploying));
    assert!(tracker.resources().get("core/net/subnet").is_none());

    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);

    let item = resource(&tracker, "core/net/subnet");
    assert_eq!(item.status, Some(ResourceStatus::Creating));
    assert!(!item.provisional);
    assert!(!child(&tracker, "core/net").provisional);
    assert_eq!(tracker.resources().len(), 1);
    assert_eq!(tracker.top_level_keys(), &[ItemKey::child("core")]);
}

#[test]
fn early_nested_event_merges_into_seeded_entry() {
    let mut tracker = tracker();
    tracker.seed(&nested_changes(), None);
    tracker.apply_event(&resource_event("c-2", "subnet", ResourceStatus::Created));
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&child_event("c-1", "c-2", "net", InstanceStatus::Deploying));

    let item = resource(&tracker, "core/net/subnet");
    assert_eq!(item.status, Some(ResourceStatus::Created));
    assert_eq!(item.action, Some(ItemAction::Create));
    assert!(tracker.resources().get("subnet").is_none());
    assert_eq!(tracker.resources().len(), 3);
}

#[test]
fn unanchored_event_never_touches_root_element_with_same_name() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("root", "bucket", ResourceStatus::Created));
    tracker.apply_event(&resource_event("c-9", "bucket", ResourceStatus::Creating));

    assert_eq!(
        resource(&tracker, "bucket").status,
        Some(ResourceStatus::Created)
    );

    let event = child_event("root", "c-9", "store", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    assert_eq!(
        resource(&tracker, "bucket").status,
        Some(ResourceStatus::Created)
    );
    assert_eq!(
        resource(&tracker, "store/bucket").status,
        Some(ResourceStatus::Creating)
    );
    assert_eq!(tracker.resources().len(), 2);
}

#[test]
fn root_element_displaces_provisional_with_same_name() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("c-9", "bucket", ResourceStatus::Creating));
    tracker.apply_event(&resource_event("root", "bucket", ResourceStatus::Created));

    let root = resource(&tracker, "bucket");
    assert_eq!(root.status, Some(ResourceStatus::Created));
    assert!(!root.provisional);
    assert_eq!(tracker.top_level_keys(), &[ItemKey::resource("bucket")]);

    let event = child_event("root", "c-9", "store", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    assert_eq!(
        resource(&tracker, "store/bucket").status,
        Some(ResourceStatus::Creating)
    );
    assert_eq!(tracker.resources().len(), 2);
}

#[test]
fn interrupted_child_follows_planned_action() {
    let mut tracker = tracker();
    let mut changes = BlueprintChanges::default();
    changes
        .child_changes
        .insert("core".into(), BlueprintChanges::default());
    tracker.seed(&changes, None);

    let event = child_event("root", "c-1", "core", InstanceStatus::DeployInterrupted);
    tracker.apply_event(&event);
    assert_eq!(
        child(&tracker, "core").status,
        Some(InstanceStatus::UpdateInterrupted)
    );
}

#[test]
fn root_adopted_from_deployment_event() {
    let mut tracker = Tracker::default();
    let event = resource_event("inst-1", "bucket", ResourceStatus::Creating);
    tracker.apply_event(&event);
    assert!(tracker.top_level_keys().is_empty());

    let Event::DeploymentUpdate(update) = deployment_event(InstanceStatus::Deploying) else {
        panic!("expected deployment update");
    };
    tracker.apply_event(&Event::DeploymentUpdate(dw_core::DeploymentUpdate {
        instance_id: "inst-1".into(),
        ..update
    }));

    assert_eq!(
        tracker.root_instance_id().map(|id| id.as_str()),
        Some("inst-1")
    );
    assert!(!resource(&tracker, "bucket").provisional);
    assert_eq!(tracker.top_level_keys(), &[ItemKey::resource("bucket")]);
}
