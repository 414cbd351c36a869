// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seeding the tracker from a change description and snapshot.

use crate::levels::{planned_entries, snapshot_entries, PlannedChanges, PlannedEntry};
use crate::tracker::{park_provisional, Tracker};
use dw_core::{
    join_path, BlueprintChanges, ChildItem, InstanceState, ItemAction, ItemKey, ItemKind, LinkItem,
    ResourceItem, TrackedItem,
};
use std::collections::HashSet;

impl Tracker {
    /// Build the initial element set before any event arrives.
    ///
    /// Root-level planned elements are listed top-level in plan order,
    /// followed by snapshot elements the plan does not mention. Nested
    /// contents of planned children are registered, so events for them
    /// find their entries, but are not listed.
    pub fn seed(&mut self, changes: &BlueprintChanges, snapshot: Option<&InstanceState>) {
        if let Some(state) = snapshot {
            self.adopt_root(&state.instance_id);
        }

        let mut seen = HashSet::new();
        for entry in planned_entries(changes) {
            seen.insert((entry.kind, entry.name.clone()));
            let key = self.materialize("", &entry, snapshot, false);
            if let Some(nested) = entry.child_changes() {
                let nested_snapshot = snapshot.and_then(|s| s.child(&entry.name));
                self.seed_nested(&key.path, nested, nested_snapshot);
            }
            self.push_top_level(key);
        }

        if let Some(state) = snapshot {
            for entry in snapshot_entries(state, ItemAction::NoChange) {
                if seen.contains(&(entry.kind, entry.name.clone())) {
                    continue;
                }
                let key = self.materialize("", &entry, Some(state), false);
                self.push_top_level(key);
            }
        }

        tracing::info!(
            top_level = self.top_level.len(),
            resources = self.resources.len(),
            children = self.children.len(),
            links = self.links.len(),
            "seeded from change description"
        );
    }

    /// Seed from a snapshot alone, for viewing a deployment without changes.
    pub fn seed_inspect(&mut self, snapshot: &InstanceState) {
        self.inspect = true;
        self.adopt_root(&snapshot.instance_id);
        for entry in snapshot_entries(snapshot, ItemAction::Inspect) {
            let key = self.materialize("", &entry, Some(snapshot), false);
            self.push_top_level(key);
        }
        tracing::info!(top_level = self.top_level.len(), "seeded for inspection");
    }

    fn seed_nested(
        &mut self,
        parent_path: &str,
        changes: &BlueprintChanges,
        snapshot: Option<&InstanceState>,
    ) {
        for entry in planned_entries(changes) {
            let key = self.materialize(parent_path, &entry, snapshot, false);
            if let Some(nested) = entry.child_changes() {
                let nested_snapshot = snapshot.and_then(|s| s.child(&entry.name));
                self.seed_nested(&key.path, nested, nested_snapshot);
            }
        }
    }

    /// Ensure a registry entry exists for a planned element under
    /// `parent_path` and fill in what the plan and snapshot know about it.
    /// Live status reported by events is never touched.
    pub(crate) fn materialize(
        &mut self,
        parent_path: &str,
        entry: &PlannedEntry<'_>,
        parent_snapshot: Option<&InstanceState>,
        skipped: bool,
    ) -> ItemKey {
        let path = join_path(parent_path, &entry.name);
        match entry.kind {
            ItemKind::Resource => {
                park_provisional(&mut self.resources, &path);
                if !self.resources.contains(&path) {
                    self.resources.insert(ResourceItem::new(&entry.name, &path));
                }
                if let Some(item) = self.resources.get_mut(&path) {
                    item.assign_action(entry.action);
                    if let PlannedChanges::Resource(changes) = entry.changes {
                        if item.resource_id.is_none() {
                            item.resource_id = changes.resource_id.clone();
                        }
                        if item.resource_type.is_none() {
                            item.resource_type = changes.resource_type.clone();
                        }
                        if item.changes.is_none() {
                            item.changes = Some(changes.clone());
                        }
                    }
                    let state = parent_snapshot.and_then(|s| s.resource_by_name(&entry.name));
                    if let Some(state) = state {
                        item.hydrate(state);
                    }
                    if skipped {
                        item.mark_skipped();
                    }
                }
            }
            ItemKind::Child => {
                park_provisional(&mut self.children, &path);
                if !self.children.contains(&path) {
                    self.children.insert(ChildItem::new(&entry.name, &path));
                }
                if let Some(item) = self.children.get_mut(&path) {
                    item.assign_action(entry.action);
                    if let PlannedChanges::Child(changes) = entry.changes {
                        if item.changes.is_none() {
                            item.changes = Some(changes.clone());
                        }
                    }
                    if let Some(state) = parent_snapshot.and_then(|s| s.child(&entry.name)) {
                        item.hydrate(state);
                    }
                    if skipped {
                        item.mark_skipped();
                    }
                }
            }
            ItemKind::Link => {
                park_provisional(&mut self.links, &path);
                if !self.links.contains(&path) {
                    self.links.insert(LinkItem::new(&entry.name, &path));
                }
                if let Some(item) = self.links.get_mut(&path) {
                    item.assign_action(entry.action);
                    if let PlannedChanges::Link(changes) = entry.changes {
                        if item.changes.is_none() {
                            item.changes = Some(changes.clone());
                        }
                    }
                    if let Some(state) = parent_snapshot.and_then(|s| s.link(&entry.name)) {
                        item.hydrate(state);
                    }
                    if skipped {
                        item.mark_skipped();
                    }
                }
            }
        }
        ItemKey::new(entry.kind, path)
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
