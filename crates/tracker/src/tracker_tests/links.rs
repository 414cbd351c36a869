// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::{Event, LinkChanges, LinkUpdate, PreciseLinkStatus, ResourceChanges};

fn link_update(event: Event) -> LinkUpdate {
    match event {
        Event::LinkUpdate(update) => update,
        other => panic!("expected link update, got {}", other.name()),
    }
}

#[test]
fn link_event_derives_endpoint_names() {
    let mut tracker = tracker();
    tracker.apply_event(&link_event("root", "fn::queue", LinkStatus::Creating));

    let item = tracker.links().get("fn::queue").unwrap();
    assert_eq!(item.resource_a_name, "fn");
    assert_eq!(item.resource_b_name, "queue");
    assert_eq!(item.status, Some(LinkStatus::Creating));
    assert_eq!(tracker.top_level_keys(), &[ItemKey::link("fn::queue")]);
}

#[test]
fn planned_link_keeps_action() {
    let mut fn_changes = ResourceChanges::default();
    fn_changes
        .new_outbound_links
        .insert("queue".into(), LinkChanges::default());
    let mut changes = BlueprintChanges::default();
    changes.new_resources.insert("fn".into(), fn_changes);

    let mut tracker = tracker();
    tracker.seed(&changes, None);
    tracker.apply_event(&link_event("root", "fn::queue", LinkStatus::Created));

    let item = tracker.links().get("fn::queue").unwrap();
    assert_eq!(item.action, Some(ItemAction::Create));
    assert_eq!(item.status, Some(LinkStatus::Created));
    assert!(item.changes.is_some());
    assert_eq!(
        tracker.top_level_keys(),
        &[ItemKey::resource("fn"), ItemKey::link("fn::queue")]
    );
}

#[test]
fn halted_link_is_interrupted_at_running_stage() {
    let mut tracker = tracker();
    let update = link_update(link_event("root", "fn::queue", LinkStatus::Creating));
    tracker.apply_event(&Event::LinkUpdate(LinkUpdate {
        precise_status: PreciseLinkStatus::UpdatingResourceB,
        ..update
    }));
    tracker.apply_event(&deployment_event(InstanceStatus::DeployFailed));

    let item = tracker.links().get("fn::queue").unwrap();
    assert_eq!(item.status, Some(LinkStatus::CreateInterrupted));
    assert_eq!(
        item.precise_status,
        Some(PreciseLinkStatus::ResourceBUpdateInterrupted)
    );
    assert_eq!(item.category(), StatusCategory::Interrupted);
}

#[test]
fn nested_link_resolves_under_child() {
    let mut tracker = tracker();
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&link_event("c-1", "fn::queue", LinkStatus::Creating));

    assert!(tracker.links().contains("core/fn::queue"));
    assert_eq!(tracker.top_level_keys(), &[ItemKey::child("core")]);
}
