// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::tracker::TrackerConfig;
use dw_core::test_support::{
    child_event, deployment_event, link_event, new_resources, resource_event,
    resource_failed_event,
};
use dw_core::{BlueprintChanges, InstanceStatus, LinkStatus, ResourceStatus};
use std::collections::HashSet;

fn tracker() -> Tracker {
    Tracker::new(TrackerConfig {
        instance_id: Some("root".into()),
    })
}

fn halted_run() -> Tracker {
    let mut changes = new_resources(&["a", "b", "c", "d", "e"]);
    changes
        .new_children
        .insert("core".into(), new_resources(&["vpc"]));

    let mut tracker = tracker();
    tracker.seed(&changes, None);
    tracker.apply_event(&resource_event("root", "a", ResourceStatus::Created));
    tracker.apply_event(&resource_failed_event("root", "b", &["quota exceeded"]));
    tracker.apply_event(&resource_event("root", "c", ResourceStatus::CreateFailed));
    tracker.apply_event(&resource_event("root", "d", ResourceStatus::Creating));
    let event = child_event("root", "c-1", "core", InstanceStatus::Deploying);
    tracker.apply_event(&event);
    tracker.apply_event(&resource_event("c-1", "vpc", ResourceStatus::Created));
    tracker.apply_event(&deployment_event(InstanceStatus::DeployFailed));
    tracker
}

fn paths<'a>(elements: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    elements.collect()
}

#[yare::parameterized(
    root_resource = { "", ItemKind::Resource, "bucket", "resources.bucket" },
    root_link = { "", ItemKind::Link, "fn::queue", "links.fn::queue" },
    nested = { "children.core", ItemKind::Resource, "vpc", "children.core::resources.vpc" },
    deep_child = { "children.a::children.b", ItemKind::Child, "c", "children.a::children.b::children.c" },
)]
fn display_paths(parent: &str, kind: ItemKind, name: &str, expected: &str) {
    assert_eq!(display_path(parent, kind, name), expected);
}

#[test]
fn summary_classifies_each_element() {
    let summary = halted_run().summary();

    similar_asserts::assert_eq!(
        summary.successful,
        vec![
            SuccessfulElement {
                kind: ItemKind::Resource,
                name: "a".into(),
                path: "resources.a".into(),
                action: "created".into(),
            },
            SuccessfulElement {
                kind: ItemKind::Resource,
                name: "vpc".into(),
                path: "children.core::resources.vpc".into(),
                action: "created".into(),
            },
        ]
    );
    similar_asserts::assert_eq!(
        summary.failed,
        vec![FailedElement {
            kind: ItemKind::Resource,
            name: "b".into(),
            path: "resources.b".into(),
            failure_reasons: vec!["quota exceeded".into()],
        }]
    );
    assert_eq!(
        paths(summary.interrupted.iter().map(|e| e.path.as_str())),
        vec!["resources.d", "children.core"]
    );
    assert_eq!(
        paths(summary.skipped.iter().map(|e| e.path.as_str())),
        vec!["resources.e"]
    );
    assert!(summary.has_failures());
    assert!(summary.has_interruptions());
}

#[test]
fn failed_without_reasons_is_not_reported() {
    let summary = halted_run().summary();
    let all: Vec<_> = summary
        .successful
        .iter()
        .map(|e| e.path.as_str())
        .chain(summary.failed.iter().map(|e| e.path.as_str()))
        .chain(summary.interrupted.iter().map(|e| e.path.as_str()))
        .collect();
    assert!(!all.contains(&"resources.c"));
}

#[test]
fn outcome_lists_are_exclusive() {
    let summary = halted_run().summary();
    let mut seen = HashSet::new();
    let all = summary
        .successful
        .iter()
        .map(|e| e.path.clone())
        .chain(summary.failed.iter().map(|e| e.path.clone()))
        .chain(summary.interrupted.iter().map(|e| e.path.clone()));
    for path in all {
        assert!(seen.insert(path.clone()), "{path} listed twice");
    }
}

#[test]
fn unreached_and_provisional_elements_are_reported_last() {
    let mut tracker = tracker();
    tracker.apply_event(&resource_event("root", "bucket", ResourceStatus::Created));
    tracker.apply_event(&resource_event("c-9", "orphan", ResourceStatus::Created));
    tracker.apply_event(&link_event("root", "fn::queue", LinkStatus::Created));

    let summary = tracker.summary();
    assert_eq!(
        paths(summary.successful.iter().map(|e| e.path.as_str())),
        vec!["resources.bucket", "links.fn::queue", "resources.orphan"]
    );
}

#[test]
fn child_success_uses_instance_verb() {
    let mut tracker = tracker();
    let mut changes = BlueprintChanges::default();
    changes
        .new_children
        .insert("core".into(), BlueprintChanges::default());
    tracker.seed(&changes, None);
    let event = child_event("root", "c-1", "core", InstanceStatus::Deployed);
    tracker.apply_event(&event);

    let summary = tracker.summary();
    assert_eq!(summary.successful.len(), 1);
    assert_eq!(summary.successful[0].action, "deployed");
    assert_eq!(summary.successful[0].path, "children.core");
}

#[test]
fn empty_tracker_has_empty_summary() {
    assert_eq!(tracker().summary(), DeploymentSummary::default());
}
