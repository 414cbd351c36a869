// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-kind element registries keyed by full hierarchical path.

use dw_core::{is_direct_child_path, TrackedItem};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered map of path to element.
///
/// At most one entry exists per element. Entries created under a bare name
/// before the element's full path was known are migrated, not duplicated.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Registry<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: TrackedItem> Registry<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&T> {
        self.items.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut T> {
        self.items.get_mut(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.items.iter().map(|(path, item)| (path.as_str(), item))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.values_mut()
    }

    /// Entries exactly one level below `parent_path`.
    pub fn direct_children<'a>(&'a self, parent_path: &'a str) -> impl Iterator<Item = &'a T> + 'a {
        self.items
            .iter()
            .filter(move |(path, _)| is_direct_child_path(parent_path, path))
            .map(|(_, item)| item)
    }

    /// Store `item` under its own path. A second write for the same path is
    /// merged into the existing entry.
    pub fn insert(&mut self, item: T) -> &mut T {
        match self.items.entry(item.path().to_string()) {
            Entry::Occupied(entry) => {
                let existing = entry.into_mut();
                existing.absorb(item);
                existing
            }
            Entry::Vacant(entry) => entry.insert(item),
        }
    }

    /// Find the entry for `path`, or move a provisional entry stored under
    /// the bare `name` to `path`.
    ///
    /// Only provisional entries migrate: an anchored entry under the bare
    /// name is a distinct root-level element that happens to share the name.
    pub fn lookup_or_migrate(&mut self, path: &str, name: &str) -> Option<&mut T> {
        self.lookup_or_migrate_if(path, name, |_| true)
    }

    /// As [`Registry::lookup_or_migrate`], migrating only entries accepted by `accept`.
    pub fn lookup_or_migrate_if(
        &mut self,
        path: &str,
        name: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Option<&mut T> {
        if self.items.contains_key(path) {
            return self.items.get_mut(path);
        }
        let migratable = self
            .items
            .get(name)
            .is_some_and(|item| item.is_provisional() && accept(item));
        if path == name || !migratable {
            return None;
        }
        let mut item = self.items.shift_remove(name)?;
        tracing::debug!(kind = %T::KIND, from = name, to = path, "migrated element to full path");
        item.set_path(path.to_string());
        Some(self.insert(item))
    }

    /// Paths of entries created from unanchored events.
    pub(crate) fn provisional_paths(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, item)| item.is_provisional())
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Move the entry at `from` to `to`, merging into any entry already there.
    pub(crate) fn relocate(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let Some(mut item) = self.items.shift_remove(from) else {
            return false;
        };
        item.set_path(to.to_string());
        self.insert(item);
        true
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
