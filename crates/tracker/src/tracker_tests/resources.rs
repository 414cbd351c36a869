// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::{Event, ResourceDurations, ResourceUpdate};

#[test]
fn root_resource_event_creates_top_level_entry() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("root", "bucket", ResourceStatus::Creating));

    let item = resource(&tracker, "bucket");
    assert_eq!(item.status, Some(ResourceStatus::Creating));
    assert_eq!(
        item.resource_id.as_ref().map(|id| id.as_str()),
        Some("bucket-id")
    );
    assert!(item.action.is_none());
    assert!(!item.provisional);
    assert_eq!(tracker.top_level_keys(), &[ItemKey::resource("bucket")]);
}

#[test]
fn empty_instance_id_means_root() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("", "bucket", ResourceStatus::Creating));

    assert!(tracker.resources().contains("bucket"));
    assert_eq!(tracker.top_level_keys().len(), 1);
}

#[test]
fn event_updates_seeded_entry_in_place() {
    let mut tracker = tracker();
    tracker.seed(&new_resources(&["bucket"]), None);
    tracker.apply_event(&resource_event("root", "bucket", ResourceStatus::Created));

    let item = resource(&tracker, "bucket");
    assert_eq!(item.action, Some(ItemAction::Create));
    assert_eq!(item.status, Some(ResourceStatus::Created));
    assert_eq!(tracker.resources().len(), 1);
    assert_eq!(tracker.top_level_keys().len(), 1);
}

#[test]
fn failure_reasons_kept_only_while_failed() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_failed_event("root", "db", &["quota exceeded"]));
    assert_eq!(
        resource(&tracker, "db").failure_reasons,
        vec!["quota exceeded".to_string()]
    );

    tracker.apply_event(&resource_event("root", "db", ResourceStatus::Created));
    assert!(resource(&tracker, "db").failure_reasons.is_empty());
}

#[test]
fn reasons_on_non_failed_status_are_dropped() {
    let mut tracker = tracker();
    let event = resource_event("root", "db", ResourceStatus::Updating);
    let Event::ResourceUpdate(update) = event else {
        panic!("expected resource update");
    };
    let update = ResourceUpdate {
        failure_reasons: vec!["transient".into()],
        ..update
    };
    tracker.apply_event(&Event::ResourceUpdate(update));

    assert!(resource(&tracker, "db").failure_reasons.is_empty());
}

#[yare::parameterized(
    planned_update = { Some(ItemAction::Update), ResourceStatus::CreateInterrupted, ResourceStatus::UpdateInterrupted },
    planned_recreate = { Some(ItemAction::Recreate), ResourceStatus::CreateInterrupted, ResourceStatus::UpdateInterrupted },
    planned_delete = { Some(ItemAction::Delete), ResourceStatus::UpdateInterrupted, ResourceStatus::DestroyInterrupted },
    unplanned = { None, ResourceStatus::UpdateInterrupted, ResourceStatus::UpdateInterrupted },
)]
fn interrupted_status_follows_planned_action(
    action: Option<ItemAction>,
    reported: ResourceStatus,
    expected: ResourceStatus,
) {
    let mut tracker = tracker();
    let mut changes = BlueprintChanges::default();
    match action {
        Some(ItemAction::Delete) => changes.removed_resources.push("db".into()),
        Some(ItemAction::Recreate) => {
            changes.resource_changes.insert(
                "db".into(),
                dw_core::ResourceChanges {
                    must_recreate: true,
                    ..Default::default()
                },
            );
        }
        Some(_) => {
            changes.resource_changes.insert(
                "db".into(),
                dw_core::ResourceChanges {
                    removed_fields: vec!["spec.tags".into()],
                    ..Default::default()
                },
            );
        }
        None => {}
    }
    tracker.seed(&changes, None);
    tracker.apply_event(&resource_event("root", "db", reported));

    assert_eq!(resource(&tracker, "db").status, Some(expected));
}

#[test]
fn durations_only_overwrite_when_present() {
    let mut tracker = tracker();
    let Event::ResourceUpdate(update) = resource_event("root", "db", ResourceStatus::Created) else {
        panic!("expected resource update");
    };
    let durations = ResourceDurations {
        total_duration: Some(1500.0),
        ..Default::default()
    };
    tracker.apply_event(&Event::ResourceUpdate(ResourceUpdate {
        durations: Some(durations.clone()),
        ..update.clone()
    }));
    tracker.apply_event(&Event::ResourceUpdate(update));

    assert_eq!(resource(&tracker, "db").durations, Some(durations));
}

#[test]
fn nested_resource_resolves_through_child_mappings() {
    let mut tracker = tracker();
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&child_event("c-1", "c-2", "net", InstanceStatus::Deploying));
    tracker.apply_event(&resource_event("c-2", "subnet", ResourceStatus::Creating));

    assert!(tracker.resources().contains("core/net/subnet"));
    assert_eq!(tracker.top_level_keys(), &[ItemKey::child("core")]);
}

#[test]
fn seeded_nested_resource_is_found_by_event() {
    let mut tracker = tracker();
    tracker.seed(&nested_changes(), None);
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&child_event("c-1", "c-2", "net", InstanceStatus::Deploying));
    tracker.apply_event(&resource_event("c-2", "subnet", ResourceStatus::Creating));

    let item = resource(&tracker, "core/net/subnet");
    assert_eq!(item.action, Some(ItemAction::Create));
    assert_eq!(item.status, Some(ResourceStatus::Creating));
    assert_eq!(tracker.resources().len(), 3);
}
