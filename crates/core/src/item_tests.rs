// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn split_link_name_on_separator() {
    assert_eq!(
        split_link_name("api::table"),
        ("api".to_string(), "table".to_string())
    );
}

#[test]
fn split_link_name_without_separator() {
    assert_eq!(
        split_link_name("orphan"),
        ("orphan".to_string(), String::new())
    );
}

proptest! {
    #[test]
    fn split_link_name_round_trips(a in "[a-zA-Z0-9_]{1,12}", b in "[a-zA-Z0-9_]{1,12}") {
        let (left, right) = split_link_name(&link_name(&a, &b));
        prop_assert_eq!(left, a);
        prop_assert_eq!(right, b);
    }

    #[test]
    fn split_link_name_without_separator_keeps_whole_name(name in "[a-zA-Z0-9_]{1,20}") {
        let (left, right) = split_link_name(&name);
        prop_assert_eq!(left, name);
        prop_assert_eq!(right, "");
    }
}

#[test]
fn link_item_derives_endpoints() {
    let link = LinkItem::new("fn::queue", "child/fn::queue");
    assert_eq!(link.resource_a_name, "fn");
    assert_eq!(link.resource_b_name, "queue");
    assert_eq!(link.name(), "fn::queue");
    assert_eq!(link.key(), ItemKey::link("child/fn::queue"));
}

#[test]
fn path_helpers() {
    assert_eq!(join_path("", "db"), "db");
    assert_eq!(join_path("core/net", "db"), "core/net/db");
    assert_eq!(parent_path("core/net/db"), Some("core/net"));
    assert_eq!(parent_path("db"), None);
    assert!(is_direct_child_path("core", "core/db"));
    assert!(!is_direct_child_path("core", "core/net/db"));
    assert!(!is_direct_child_path("core", "db"));
}

#[test]
fn assign_action_sticks_on_first_write() {
    let mut item = ResourceItem::new("db", "db");
    item.assign_action(ItemAction::Create);
    item.assign_action(ItemAction::Delete);
    assert_eq!(item.action, Some(ItemAction::Create));
}

#[test]
fn interrupt_uses_planned_action_and_clears_reasons() {
    let mut item = ResourceItem {
        action: Some(ItemAction::Update),
        status: Some(ResourceStatus::Updating),
        precise_status: Some(PreciseResourceStatus::UpdateConfigComplete),
        ..ResourceItem::new("db", "db")
    };
    assert!(item.interrupt());
    assert_eq!(item.status, Some(ResourceStatus::UpdateInterrupted));
    assert_eq!(
        item.precise_status,
        Some(PreciseResourceStatus::UpdateInterrupted)
    );
    assert_eq!(item.category(), StatusCategory::Interrupted);
}

#[test]
fn interrupt_ignores_items_not_in_progress() {
    let mut pending = ChildItem::new("net", "net");
    assert!(!pending.interrupt());
    assert!(pending.status.is_none());

    let mut rolling_back = LinkItem {
        status: Some(LinkStatus::CreateRollingBack),
        ..LinkItem::new("a::b", "a::b")
    };
    assert!(!rolling_back.interrupt());
    assert_eq!(rolling_back.status, Some(LinkStatus::CreateRollingBack));
}

#[test]
fn absorb_prefers_newer_live_fields_and_keeps_static_ones() {
    let mut seeded = ResourceItem {
        action: Some(ItemAction::Create),
        resource_type: Some("aws/s3/bucket".to_string()),
        durations: Some(ResourceDurations {
            total_duration: Some(5.0),
            ..Default::default()
        }),
        ..ResourceItem::new("bucket", "core/bucket")
    };
    let observed = ResourceItem {
        status: Some(ResourceStatus::Creating),
        attempt: 2,
        skipped: true,
        last_update_timestamp: Some(42),
        ..ResourceItem::new("bucket", "bucket")
    };

    seeded.absorb(observed);

    assert_eq!(seeded.path, "core/bucket");
    assert_eq!(seeded.action, Some(ItemAction::Create));
    assert_eq!(seeded.resource_type.as_deref(), Some("aws/s3/bucket"));
    assert_eq!(seeded.status, Some(ResourceStatus::Creating));
    assert_eq!(seeded.attempt, 2);
    assert!(seeded.skipped);
    assert_eq!(seeded.last_update_timestamp, Some(42));
    assert_eq!(seeded.durations.and_then(|d| d.total_duration), Some(5.0));
}

#[test]
fn item_ref_reports_pending_label_without_status() {
    let child = ChildItem::new("net", "net");
    let item = ItemRef::Child(&child);
    assert_eq!(item.kind(), ItemKind::Child);
    assert_eq!(item.status_label(), "pending");
    assert_eq!(item.category(), StatusCategory::Pending);
}

#[test]
fn status_label_falls_back_to_last_known_state() {
    let mut resource = ResourceItem::new("db", "db");
    resource.hydrate(&ResourceState {
        status: Some(ResourceStatus::Created),
        ..Default::default()
    });
    assert_eq!(ItemRef::Resource(&resource).status_label(), "created");

    resource.status = Some(ResourceStatus::Updating);
    assert_eq!(ItemRef::Resource(&resource).status_label(), "updating");
}

#[test]
fn item_ref_serializes_with_kind_tag() {
    let resource = ResourceItem::new("db", "db");
    let json = serde_json::to_value(ItemRef::Resource(&resource)).unwrap();
    assert_eq!(json["kind"], "resource");
    assert_eq!(json["name"], "db");
}
