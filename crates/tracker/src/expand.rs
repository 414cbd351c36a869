// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy expansion of a child blueprint's direct contents.

use crate::levels::{planned_entries, snapshot_entries};
use crate::tracker::Tracker;
use dw_core::{ItemAction, ItemKey, ItemKind, TrackedItem};
use std::collections::HashSet;

impl Tracker {
    /// Direct contents of the child at `key`, registering any element not
    /// yet tracked.
    ///
    /// Sources in order, first listing of a name per kind wins: the child's
    /// change sub-tree, its snapshot, then entries events have already
    /// placed beneath it. A skipped child passes its flag to everything
    /// returned. Non-child keys have no contents.
    pub fn expand(&mut self, key: &ItemKey) -> Vec<ItemKey> {
        if key.kind != ItemKind::Child {
            return Vec::new();
        }
        let Some(child) = self.children.get(&key.path) else {
            return Vec::new();
        };
        let changes = child.changes.clone();
        let snapshot = child.snapshot.clone();
        let inherited = ItemAction::inherited(child.action);
        let skipped = child.skipped;

        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for entry in changes.iter().flat_map(planned_entries) {
            if seen.insert((entry.kind, entry.name.clone())) {
                let materialized = self.materialize(&key.path, &entry, snapshot.as_ref(), skipped);
                keys.push(materialized);
            }
        }
        for entry in snapshot.iter().flat_map(|s| snapshot_entries(s, inherited)) {
            if seen.insert((entry.kind, entry.name.clone())) {
                let materialized = self.materialize(&key.path, &entry, snapshot.as_ref(), skipped);
                keys.push(materialized);
            }
        }

        for (kind, name, path) in self.tracked_beneath(&key.path) {
            if !seen.insert((kind, name)) {
                continue;
            }
            let child_key = ItemKey::new(kind, path);
            if skipped {
                self.mark_skipped(&child_key);
            }
            keys.push(child_key);
        }

        tracing::debug!(path = %key.path, count = keys.len(), "expanded child");
        keys
    }

    /// Anchored registry entries exactly one level below `parent_path`.
    pub(crate) fn tracked_beneath(&self, parent_path: &str) -> Vec<(ItemKind, String, String)> {
        fn anchored<T: TrackedItem>(item: &T) -> Option<(ItemKind, String, String)> {
            if item.is_provisional() {
                return None;
            }
            Some((T::KIND, item.name().to_string(), item.path().to_string()))
        }
        let resources = self
            .resources
            .direct_children(parent_path)
            .filter_map(anchored);
        let children = self
            .children
            .direct_children(parent_path)
            .filter_map(anchored);
        let links = self.links.direct_children(parent_path).filter_map(anchored);
        resources.chain(children).chain(links).collect()
    }

    fn mark_skipped(&mut self, key: &ItemKey) {
        let path = key.path.as_str();
        match key.kind {
            ItemKind::Resource => {
                if let Some(item) = self.resources.get_mut(path) {
                    item.mark_skipped();
                }
            }
            ItemKind::Child => {
                if let Some(item) = self.children.get_mut(path) {
                    item.mark_skipped();
                }
            }
            ItemKind::Link => {
                if let Some(item) = self.links.get_mut(path) {
                    item.mark_skipped();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
