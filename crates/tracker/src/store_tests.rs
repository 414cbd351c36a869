// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dw_core::{ItemAction, ResourceItem, ResourceStatus};

fn provisional(name: &str) -> ResourceItem {
    ResourceItem {
        provisional: true,
        ..ResourceItem::new(name, name)
    }
}

#[test]
fn lookup_finds_exact_path() {
    let mut registry = Registry::default();
    registry.insert(ResourceItem::new("r", "a/b/r"));

    assert!(registry.lookup_or_migrate("a/b/r", "r").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_misses_without_candidates() {
    let mut registry: Registry<ResourceItem> = Registry::default();
    assert!(registry.lookup_or_migrate("a/r", "r").is_none());
    assert!(registry.is_empty());
}

#[test]
fn migration_preserves_data() {
    let mut registry = Registry::default();
    let mut item = provisional("myResource");
    item.status = Some(ResourceStatus::Creating);
    item.action = Some(ItemAction::Create);
    registry.insert(item);

    let migrated = registry
        .lookup_or_migrate("parentChild/myResource", "myResource")
        .unwrap();
    assert_eq!(migrated.path, "parentChild/myResource");
    assert_eq!(migrated.status, Some(ResourceStatus::Creating));
    assert_eq!(migrated.action, Some(ItemAction::Create));

    assert!(registry.get("myResource").is_none());
    assert!(registry.get("parentChild/myResource").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn anchored_root_entry_is_not_migrated() {
    let mut registry = Registry::default();
    registry.insert(ResourceItem::new("bucket", "bucket"));

    let migrated = registry.lookup_or_migrate("core/bucket", "bucket");
    assert!(migrated.is_none());
    assert!(registry.get("bucket").is_some());
}

#[test]
fn root_path_never_migrates_from_itself() {
    let mut registry = Registry::default();
    registry.insert(provisional("bucket"));
    assert!(registry.lookup_or_migrate("bucket", "bucket").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn insert_merges_duplicate_path() {
    let mut registry = Registry::default();
    registry.insert(ResourceItem {
        action: Some(ItemAction::Update),
        ..ResourceItem::new("r", "a/r")
    });
    registry.insert(ResourceItem {
        status: Some(ResourceStatus::Updated),
        skipped: true,
        ..ResourceItem::new("r", "a/r")
    });

    let item = registry.get("a/r").unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(item.action, Some(ItemAction::Update));
    assert_eq!(item.status, Some(ResourceStatus::Updated));
    assert!(item.skipped);
}

#[test]
fn relocate_merges_into_occupied_path() {
    let mut registry = Registry::default();
    registry.insert(ResourceItem {
        action: Some(ItemAction::Create),
        ..ResourceItem::new("r", "a/b/r")
    });
    let mut early = provisional("r");
    early.status = Some(ResourceStatus::Created);
    registry.insert(early);

    assert!(registry.relocate("r", "a/b/r"));
    let item = registry.get("a/b/r").unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(item.status, Some(ResourceStatus::Created));
    assert_eq!(item.action, Some(ItemAction::Create));
}

#[test]
fn direct_children_filters_by_depth() {
    let mut registry = Registry::default();
    for path in ["a/r1", "a/b/r2", "r3", "a/r4"] {
        let name = path.rsplit('/').next().unwrap_or(path);
        registry.insert(ResourceItem::new(name, path));
    }
    let names: Vec<_> = registry
        .direct_children("a")
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["r1", "r4"]);
}

#[test]
fn provisional_paths_lists_only_provisional() {
    let mut registry = Registry::default();
    registry.insert(provisional("x"));
    registry.insert(ResourceItem::new("y", "y"));
    assert_eq!(registry.provisional_paths(), vec!["x".to_string()]);
}

#[test]
fn migration_respects_acceptance() {
    let mut registry = Registry::default();
    registry.insert(provisional("r"));

    let rejected = registry.lookup_or_migrate_if("a/r", "r", |_| false);
    assert!(rejected.is_none());
    assert!(registry.get("r").is_some());
    let accepted = registry.lookup_or_migrate_if("a/r", "r", |_| true);
    assert!(accepted.is_some());
    assert!(registry.get("r").is_none());
}
