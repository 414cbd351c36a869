// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn modified(field: &str) -> FieldChange {
    FieldChange {
        field_path: field.to_string(),
        ..Default::default()
    }
}

#[test]
fn recreate_takes_precedence_over_field_changes() {
    let changes = ResourceChanges {
        must_recreate: true,
        modified_fields: vec![modified("spec.name")],
        ..Default::default()
    };
    assert_eq!(resource_action(&changes), ItemAction::Recreate);
}

#[test]
fn field_changes_mean_update() {
    let changes =
        ResourceChanges {
            removed_fields: vec!["spec.tags".to_string()],
            ..Default::default()
        };
    assert_eq!(resource_action(&changes), ItemAction::Update);
}

#[test]
fn link_only_changes_leave_resource_unchanged() {
    let mut changes = ResourceChanges::default();
    changes
        .new_outbound_links
        .insert("queue".to_string(), LinkChanges::default());
    assert!(changes.has_link_changes());
    assert_eq!(resource_action(&changes), ItemAction::NoChange);
}

#[test]
fn changed_child_recreate_wins() {
    let changes = BlueprintChanges {
        recreate_children: vec!["network".to_string()],
        ..Default::default()
    };
    assert_eq!(
        changes.changed_child_action("network"),
        ItemAction::Recreate
    );
    assert_eq!(changes.changed_child_action("storage"), ItemAction::Update);
}

#[test]
fn nested_changes_deserialize_with_defaults() {
    let json = r#"{"new_children": {"a": {"new_children": {"b": {"new_resources": {"r": {}}}}}}}"#;
    let changes: BlueprintChanges = serde_json::from_str(json).unwrap();

    let b = &changes.new_children["a"].new_children["b"];
    assert!(b.new_resources.contains_key("r"));
    assert!(changes.resource_changes.is_empty());
    assert!(!changes.is_empty());
    assert!(BlueprintChanges::default().is_empty());
}
