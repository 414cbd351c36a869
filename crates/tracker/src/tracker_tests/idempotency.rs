// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::Event;

fn nested_run() -> Vec<Event> {
    vec![
        resource_event("c-2", "subnet", ResourceStatus::Creating),
        child_event("root", "c-1", "core", InstanceStatus::Deploying),
        child_event("c-1", "c-2", "net", InstanceStatus::Deploying),
        resource_event("c-2", "subnet", ResourceStatus::Created),
        link_event("c-2", "subnet::table", LinkStatus::Created),
        resource_failed_event("root", "bucket", &["access denied"]),
        deployment_event(InstanceStatus::DeployRollingBack),
    ]
}

fn state_json(tracker: &Tracker) -> serde_json::Value {
    serde_json::to_value(tracker).unwrap()
}

#[test]
fn replaying_each_event_is_a_no_op() {
    let mut once = tracker();
    once.seed(&nested_changes(), None);
    let mut twice = once.clone();

    for event in nested_run() {
        once.apply_event(&event);
        twice.apply_event(&event);
        twice.apply_event(&event);
    }

    similar_asserts::assert_eq!(state_json(&once), state_json(&twice));
    assert_eq!(once.top_level_keys(), twice.top_level_keys());
}

#[test]
fn seeding_twice_is_a_no_op() {
    let mut once = tracker();
    once.seed(&nested_changes(), Some(&snapshot(&["legacy"], &[])));
    let mut twice = tracker();
    twice.seed(&nested_changes(), Some(&snapshot(&["legacy"], &[])));
    twice.seed(&nested_changes(), Some(&snapshot(&["legacy"], &[])));

    similar_asserts::assert_eq!(state_json(&once), state_json(&twice));
    assert_eq!(once.top_level_keys(), twice.top_level_keys());
}

#[test]
fn at_most_one_entry_per_element() {
    let mut tracker = tracker();
    tracker.seed(&nested_changes(), None);
    for event in nested_run() {
        tracker.apply_event(&event);
    }
    tracker.expand(&ItemKey::child("core"));
    tracker.expand(&ItemKey::child("core/net"));

    let mut names: Vec<_> = tracker
        .resources()
        .values()
        .map(|r| r.name.clone())
        .collect();
    names.sort();
    assert_eq!(names, vec!["bucket", "subnet", "vpc"]);
    assert!(tracker.resources().values().all(|r| !r.provisional));
}
