// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::{Event, PreRollbackState};

fn seeded_abc() -> Tracker {
    let mut tracker = tracker();
    tracker.seed(&new_resources(&["a", "b", "c"]), None);
    tracker.apply_event(&resource_event("root", "a", ResourceStatus::Created));
    tracker.apply_event(&resource_event("root", "b", ResourceStatus::Creating));
    tracker
}

#[yare::parameterized(
    failed = { InstanceStatus::DeployFailed },
    rolling_back = { InstanceStatus::DeployRollingBack },
    rollback_failed = { InstanceStatus::UpdateRollbackFailed },
    rollback_complete = { InstanceStatus::DeployRollbackComplete },
)]
fn halting_status_skips_pending_and_interrupts_in_flight(status: InstanceStatus) {
    let mut tracker = seeded_abc();
    tracker.apply_event(&deployment_event(status));

    let a = resource(&tracker, "a");
    assert_eq!(a.status, Some(ResourceStatus::Created));
    assert!(!a.skipped);

    let b = resource(&tracker, "b");
    assert_eq!(b.status, Some(ResourceStatus::CreateInterrupted));
    assert!(!b.skipped);

    let c = resource(&tracker, "c");
    assert!(c.skipped);
    assert!(c.status.is_none());
}

#[yare::parameterized(
    deploying = { InstanceStatus::Deploying },
    deployed = { InstanceStatus::Deployed },
    preparing = { InstanceStatus::Preparing },
)]
fn non_halting_status_leaves_elements(status: InstanceStatus) {
    let mut tracker = seeded_abc();
    tracker.apply_event(&deployment_event(status));

    assert!(!resource(&tracker, "c").skipped);
    assert_eq!(
        resource(&tracker, "b").status,
        Some(ResourceStatus::Creating)
    );
    assert_eq!(tracker.deployment().status, Some(status));
}

#[test]
fn unchanged_snapshot_elements_are_not_skipped() {
    let mut tracker = tracker();
    let state = snapshot(&["existing"], &[]);
    tracker.seed(&new_resources(&["fresh"]), Some(&state));
    tracker.apply_event(&deployment_event(InstanceStatus::DeployFailed));

    assert!(resource(&tracker, "fresh").skipped);
    assert!(!resource(&tracker, "existing").skipped);
}

#[test]
fn skipped_is_never_cleared() {
    let mut tracker = seeded_abc();
    tracker.apply_event(&deployment_event(InstanceStatus::DeployRollingBack));
    let event = resource_event("root", "c", ResourceStatus::RollbackComplete);
    tracker.apply_event(&event);

    let c = resource(&tracker, "c");
    assert!(c.skipped);
    assert_eq!(c.status, Some(ResourceStatus::RollbackComplete));
}

#[test]
fn skipped_child_passes_flag_to_expanded_contents() {
    let mut tracker = tracker();
    tracker.seed(&nested_changes(), None);
    tracker.apply_event(&deployment_event(InstanceStatus::DeployFailed));

    assert!(child(&tracker, "core").skipped);
    let keys = tracker.expand(&ItemKey::child("core"));
    assert_eq!(
        keys,
        vec![ItemKey::resource("core/vpc"), ItemKey::child("core/net")]
    );
    for key in &keys {
        let skipped = tracker.get(key).is_some_and(|item| item.is_skipped());
        assert!(skipped, "{key} not skipped");
    }
}

#[test]
fn finished_records_outcome_and_halts() {
    let mut tracker = seeded_abc();
    let event = finished_event(InstanceStatus::DeployFailed, &["b timed out"]);
    tracker.apply_event(&event);

    let deployment = tracker.deployment();
    assert!(deployment.finished);
    assert_eq!(deployment.status, Some(InstanceStatus::DeployFailed));
    assert_eq!(deployment.failure_reasons, vec!["b timed out".to_string()]);
    assert_eq!(deployment.finish_timestamp, Some(1_700_000_200));
    assert!(resource(&tracker, "c").skipped);
}

#[test]
fn no_propagation_after_finish() {
    let mut tracker = tracker();
    tracker.apply_event(&finished_event(InstanceStatus::Deployed, &[]));
    tracker.apply_event(&resource_event("root", "late", ResourceStatus::Unknown));
    tracker.apply_event(&deployment_event(InstanceStatus::DeployRollbackComplete));

    assert!(!resource(&tracker, "late").skipped);
}

#[test]
fn successful_finish_skips_nothing() {
    let mut tracker = seeded_abc();
    tracker.apply_event(&finished_event(InstanceStatus::Deployed, &[]));

    assert!(tracker.deployment().finished);
    assert!(!resource(&tracker, "c").skipped);
}

#[test]
fn pre_rollback_state_is_kept() {
    let mut tracker = tracker();
    let state = snapshot(&["a"], &[]);
    tracker.apply_event(&Event::PreRollbackState(PreRollbackState {
        state: state.clone(),
    }));

    assert_eq!(tracker.deployment().pre_rollback_state, Some(state));
}

#[test]
fn skipped_child_skips_unchanged_snapshot_contents() {
    let mut tracker = tracker();
    let mut changes = BlueprintChanges::default();
    changes
        .child_changes
        .insert("core".into(), BlueprintChanges::default());
    let mut core_state = snapshot(&["db"], &[]);
    core_state.instance_id = "c-1".into();
    let mut state = snapshot(&[], &[]);
    state.child_blueprints.insert("core".into(), core_state);
    tracker.seed(&changes, Some(&state));
    tracker.apply_event(&deployment_event(InstanceStatus::UpdateRollingBack));

    let keys = tracker.expand(&ItemKey::child("core"));
    assert_eq!(keys, vec![ItemKey::resource("core/db")]);
    let db = resource(&tracker, "core/db");
    assert_eq!(db.action, Some(ItemAction::NoChange));
    assert!(db.skipped);
}

mod properties {
    use super::*;
    use dw_core::test_support::strategies::{arb_instance_status, arb_resource_status};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn skipped_survives_any_later_events(
            halt in arb_instance_status().prop_filter("halting", |s| s.halts_deployment()),
            later in proptest::collection::vec((arb_resource_status(), arb_instance_status()), 1..6),
        ) {
            let mut tracker = seeded_abc();
            tracker.apply_event(&deployment_event(halt));
            prop_assert!(resource(&tracker, "c").skipped);

            for (resource_status, deployment_status) in later {
                tracker.apply_event(&resource_event("root", "c", resource_status));
                tracker.apply_event(&deployment_event(deployment_status));
                prop_assert!(resource(&tracker, "c").skipped);
            }
        }
    }
}
