// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arrival order of events for distinct elements must not change the result.

use super::*;
use dw_core::Event;
use proptest::prelude::*;

fn events() -> Vec<Event> {
    vec![
        child_event("root", "c-1", "core", InstanceStatus::Deployed),
        child_event("c-1", "c-2", "net", InstanceStatus::Deployed),
        resource_event("c-2", "subnet", ResourceStatus::Created),
        resource_event("c-1", "vpc", ResourceStatus::Creating),
        link_event("c-2", "subnet::table", LinkStatus::Created),
        resource_event("root", "bucket", ResourceStatus::Created),
    ]
}

fn sorted<'a>(paths: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut paths: Vec<_> = paths.map(str::to_string).collect();
    paths.sort();
    paths
}

fn assert_converged(tracker: &Tracker) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        sorted(tracker.resources().iter().map(|(path, _)| path)),
        vec!["bucket", "core/net/subnet", "core/vpc"]
    );
    prop_assert_eq!(
        sorted(tracker.children().iter().map(|(path, _)| path)),
        vec!["core", "core/net"]
    );
    prop_assert_eq!(
        sorted(tracker.links().iter().map(|(path, _)| path)),
        vec!["core/net/subnet::table"]
    );
    prop_assert!(tracker.resources().values().all(|r| !r.provisional));
    prop_assert!(tracker.children().values().all(|c| !c.provisional));
    prop_assert!(tracker.links().values().all(|l| !l.provisional));

    let subnet = tracker.resources().get("core/net/subnet");
    prop_assert_eq!(subnet.and_then(|r| r.status), Some(ResourceStatus::Created));
    let vpc = tracker.resources().get("core/vpc");
    prop_assert_eq!(vpc.and_then(|r| r.status), Some(ResourceStatus::Creating));

    let mut top: Vec<_> = tracker.top_level_keys().to_vec();
    top.sort_by(|a, b| a.path.cmp(&b.path));
    prop_assert_eq!(
        top,
        vec![ItemKey::resource("bucket"), ItemKey::child("core")]
    );
    Ok(())
}

proptest! {
    #[test]
    fn any_arrival_order_converges(order in Just(events()).prop_shuffle()) {
        let mut tracker = tracker();
        for event in &order {
            tracker.apply_event(event);
        }
        assert_converged(&tracker)?;
    }

    #[test]
    fn any_arrival_order_converges_after_seeding(order in Just(events()).prop_shuffle()) {
        let mut tracker = tracker();
        tracker.seed(&nested_changes(), None);
        for event in &order {
            tracker.apply_event(event);
        }
        assert_converged(&tracker)?;

        let subnet = tracker.resources().get("core/net/subnet");
        prop_assert_eq!(subnet.and_then(|r| r.action), Some(ItemAction::Create));
    }
}
