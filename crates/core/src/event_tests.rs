// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn resource_update_deserializes_with_defaults() {
    let json = r#"{
        "type": "resource:update",
        "instance_id": "inst-1",
        "resource_id": "res-9",
        "resource_name": "ordersTable",
        "status": "create_failed",
        "failure_reasons": ["quota exceeded"]
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();

    let Event::ResourceUpdate(update) = &event else {
        panic!("expected resource update, got {event:?}");
    };
    assert_eq!(update.status, ResourceStatus::CreateFailed);
    assert_eq!(update.precise_status, PreciseResourceStatus::Unknown);
    assert_eq!(update.failure_reasons, vec!["quota exceeded".to_string()]);
    assert!(update.durations.is_none());
    assert_eq!(event.name(), "resource:update");
}

#[test]
fn event_serializes_with_type_tag() {
    let event = Event::DeploymentUpdate(DeploymentUpdate {
        instance_id: "root".into(),
        status: InstanceStatus::DeployRollingBack,
        update_timestamp: 10,
    });
    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "deployment:update");
    assert_eq!(json["status"], "deploy_rolling_back");
    assert_eq!(json["instance_id"], "root");
}

#[test]
fn log_summary_includes_identity() {
    let event = Event::ChildUpdate(
        ChildUpdate::builder()
            .parent_instance_id("root")
            .child_instance_id("c-1")
            .child_name("network")
            .build(),
    );
    assert_eq!(
        event.log_summary(),
        "child:update parent=root instance=c-1 name=network status=deploying"
    );
}

#[test]
fn builder_applies_overrides() {
    let update = LinkUpdate::builder()
        .link_name("fn::queue")
        .status(LinkStatus::Created)
        .durations(LinkDurations {
            total_duration: Some(12.5),
            ..Default::default()
        })
        .build();
    assert_eq!(update.link_name, "fn::queue");
    assert_eq!(update.status, LinkStatus::Created);
    assert_eq!(update.durations.and_then(|d| d.total_duration), Some(12.5));
}
