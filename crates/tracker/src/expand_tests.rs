// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::tracker::TrackerConfig;
use dw_core::test_support::{child_event, new_resources, resource_event, snapshot};
use dw_core::{BlueprintChanges, InstanceStatus, ResourceStatus};

fn tracker() -> Tracker {
    Tracker::new(TrackerConfig {
        instance_id: Some("root".into()),
    })
}

/// Root child `core` planned with `vpc`; its snapshot also holds `vpc` and `db`.
fn seeded() -> Tracker {
    let mut changes = BlueprintChanges::default();
    changes
        .child_changes
        .insert("core".into(), new_resources(&["vpc"]));
    let mut core_state = snapshot(&["vpc", "db"], &["vpc::db"]);
    core_state.instance_id = "c-1".into();
    let mut state = snapshot(&[], &[]);
    state.child_blueprints.insert("core".into(), core_state);

    let mut tracker = tracker();
    tracker.seed(&changes, Some(&state));
    tracker
}

#[test]
fn change_entries_win_over_snapshot() {
    let mut tracker = seeded();
    let keys = tracker.expand(&ItemKey::child("core"));

    similar_asserts::assert_eq!(
        keys,
        vec![
            ItemKey::resource("core/vpc"),
            ItemKey::resource("core/db"),
            ItemKey::link("core/vpc::db"),
        ]
    );
    let vpc = tracker.resources().get("core/vpc").unwrap();
    assert_eq!(vpc.action, Some(ItemAction::Create));
    let db = tracker.resources().get("core/db").unwrap();
    assert_eq!(db.action, Some(ItemAction::NoChange));
    assert_eq!(db.resource_type.as_deref(), Some("test/resource"));
}

#[test]
fn event_created_children_are_included() {
    let mut tracker = seeded();
    let event = child_event("root", "c-1", "core", InstanceStatus::Updating);
    tracker.apply_event(&event);
    tracker.apply_event(&resource_event("c-1", "queue", ResourceStatus::Creating));

    let keys = tracker.expand(&ItemKey::child("core"));
    assert_eq!(keys.last(), Some(&ItemKey::resource("core/queue")));
    assert_eq!(keys.len(), 4);
}

#[test]
fn expansion_is_repeatable() {
    let mut tracker = seeded();
    let first = tracker.expand(&ItemKey::child("core"));
    let count = tracker.resources().len();
    let second = tracker.expand(&ItemKey::child("core"));

    assert_eq!(first, second);
    assert_eq!(tracker.resources().len(), count);
}

#[test]
fn inspect_action_is_inherited() {
    let mut core_state = snapshot(&["db"], &[]);
    core_state
        .child_blueprints
        .insert("inner".into(), snapshot(&["cache"], &[]));
    let mut state = snapshot(&[], &[]);
    state.child_blueprints.insert("core".into(), core_state);

    let mut tracker = tracker();
    tracker.seed_inspect(&state);
    let keys = tracker.expand(&ItemKey::child("core"));
    assert_eq!(
        keys,
        vec![ItemKey::resource("core/db"), ItemKey::child("core/inner")]
    );

    let nested = tracker.expand(&ItemKey::child("core/inner"));
    assert_eq!(nested, vec![ItemKey::resource("core/inner/cache")]);
    let cache = tracker.resources().get("core/inner/cache").unwrap();
    assert_eq!(cache.action, Some(ItemAction::Inspect));
}

#[test]
fn non_child_keys_have_no_contents() {
    let mut tracker = seeded();
    assert!(tracker.expand(&ItemKey::resource("core/vpc")).is_empty());
    assert!(tracker.expand(&ItemKey::child("missing")).is_empty());
}

#[test]
fn provisional_entries_are_not_expanded() {
    let mut tracker = tracker();
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    let event = child_event("c-7", "c-8", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&resource_event("c-8", "stray", ResourceStatus::Creating));

    assert!(tracker.expand(&ItemKey::child("core")).is_empty());
}
