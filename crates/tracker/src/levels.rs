// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Planned entries of one nesting level, derived from a change description
//! or a snapshot.

use dw_core::{
    link_name, resource_action, BlueprintChanges, InstanceState, ItemAction, ItemKind,
    LinkChanges, ResourceChanges,
};
use std::collections::HashSet;

/// Change details carried by a planned entry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PlannedChanges<'a> {
    None,
    Resource(&'a ResourceChanges),
    Child(&'a BlueprintChanges),
    Link(&'a LinkChanges),
}

/// One element of a level with the action the plan assigns it.
#[derive(Debug, Clone)]
pub(crate) struct PlannedEntry<'a> {
    pub kind: ItemKind,
    pub name: String,
    pub action: ItemAction,
    pub changes: PlannedChanges<'a>,
}

impl<'a> PlannedEntry<'a> {
    fn new(kind: ItemKind, name: &str, action: ItemAction, changes: PlannedChanges<'a>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            action,
            changes,
        }
    }

    /// Nested change sub-tree of a child entry.
    pub fn child_changes(&self) -> Option<&'a BlueprintChanges> {
        match self.changes {
            PlannedChanges::Child(changes) => Some(changes),
            _ => None,
        }
    }
}

/// Entries of a level in display order: resources, then children, then
/// links. Each name appears once per kind; the first listing wins.
pub(crate) fn planned_entries(changes: &BlueprintChanges) -> Vec<PlannedEntry<'_>> {
    let mut level = Level::default();

    for (name, rc) in &changes.new_resources {
        level.resource(name, ItemAction::Create, PlannedChanges::Resource(rc));
    }
    for (name, rc) in &changes.resource_changes {
        level.resource(name, resource_action(rc), PlannedChanges::Resource(rc));
    }
    for name in &changes.removed_resources {
        level.resource(name, ItemAction::Delete, PlannedChanges::None);
    }

    for (name, cc) in &changes.new_children {
        level.child(name, ItemAction::Create, PlannedChanges::Child(cc));
    }
    for (name, cc) in &changes.child_changes {
        let action = changes.changed_child_action(name);
        level.child(name, action, PlannedChanges::Child(cc));
    }
    for name in &changes.recreate_children {
        level.child(name, ItemAction::Recreate, PlannedChanges::None);
    }
    for name in &changes.removed_children {
        level.child(name, ItemAction::Delete, PlannedChanges::None);
    }

    let resources = changes
        .new_resources
        .iter()
        .chain(&changes.resource_changes);
    for (resource_a, rc) in resources {
        for (resource_b, lc) in &rc.new_outbound_links {
            let name = link_name(resource_a, resource_b);
            level.link(&name, ItemAction::Create, PlannedChanges::Link(lc));
        }
        for (resource_b, lc) in &rc.outbound_link_changes {
            let name = link_name(resource_a, resource_b);
            level.link(&name, ItemAction::Update, PlannedChanges::Link(lc));
        }
        for resource_b in &rc.removed_outbound_links {
            let name = link_name(resource_a, resource_b);
            level.link(&name, ItemAction::Delete, PlannedChanges::None);
        }
    }
    for name in &changes.removed_links {
        level.link(name, ItemAction::Delete, PlannedChanges::None);
    }

    level.entries
}

/// Every element recorded in a snapshot, all with the same `action`.
pub(crate) fn snapshot_entries(
    state: &InstanceState,
    action: ItemAction,
) -> Vec<PlannedEntry<'static>> {
    let mut level = Level::default();
    for name in state.resource_ids.keys() {
        level.resource(name, action, PlannedChanges::None);
    }
    for resource in state.resources.values() {
        level.resource(&resource.name, action, PlannedChanges::None);
    }
    for name in state.child_blueprints.keys() {
        level.child(name, action, PlannedChanges::None);
    }
    for name in state.links.keys() {
        level.link(name, action, PlannedChanges::None);
    }
    level.entries
}

#[derive(Default)]
struct Level<'a> {
    seen: HashSet<(ItemKind, String)>,
    entries: Vec<PlannedEntry<'a>>,
}

impl<'a> Level<'a> {
    fn resource(&mut self, name: &str, action: ItemAction, changes: PlannedChanges<'a>) {
        self.push(ItemKind::Resource, name, action, changes);
    }

    fn child(&mut self, name: &str, action: ItemAction, changes: PlannedChanges<'a>) {
        self.push(ItemKind::Child, name, action, changes);
    }

    fn link(&mut self, name: &str, action: ItemAction, changes: PlannedChanges<'a>) {
        self.push(ItemKind::Link, name, action, changes);
    }

    fn push(
        &mut self,
        kind: ItemKind,
        name: &str,
        action: ItemAction,
        changes: PlannedChanges<'a>,
    ) {
        if name.is_empty() || !self.seen.insert((kind, name.to_string())) {
            return;
        }
        let entry = PlannedEntry::new(kind, name, action, changes);
        self.entries.push(entry);
    }
}

#[cfg(test)]
#[path = "levels_tests.rs"]
mod tests;
