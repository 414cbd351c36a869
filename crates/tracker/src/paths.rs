// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical path resolution from reported instance IDs.
//!
//! Child-update events teach the resolver which name and parent each child
//! instance has. Resolution walks that chain back to the deployment root,
//! always against the current maps, so elements reported before their
//! parent's identity is known resolve correctly once it is.

use dw_core::{join_path, InstanceId};
use std::collections::HashMap;

/// Outcome of resolving an element's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    /// The walk reached the deployment root. When false the path is
    /// truncated at the first instance whose identity is not yet known.
    pub anchored: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    root: Option<InstanceId>,
    child_names: HashMap<InstanceId, String>,
    parents: HashMap<InstanceId, InstanceId>,
}

impl PathResolver {
    pub fn new(root: Option<InstanceId>) -> Self {
        Self {
            root: root.filter(|r| !r.is_empty()),
            ..Default::default()
        }
    }

    pub fn root(&self) -> Option<&InstanceId> {
        self.root.as_ref()
    }

    /// Set the root instance ID if it is not known yet. Returns whether it was set.
    pub fn adopt_root(&mut self, id: &InstanceId) -> bool {
        if self.root.is_some() || id.is_empty() || self.child_names.contains_key(id) {
            return false;
        }
        self.root = Some(id.clone());
        true
    }

    /// Empty IDs and the deployment's own instance ID both denote the root.
    pub fn is_root(&self, id: &InstanceId) -> bool {
        id.is_empty() || self.root.as_ref() == Some(id)
    }

    /// Record a child instance's name and parent. Mappings are append-only:
    /// the first recording of an instance wins. Returns whether it was new.
    pub fn record_child(&mut self, child: &InstanceId, name: &str, parent: &InstanceId) -> bool {
        if child.is_empty() || self.child_names.contains_key(child) {
            return false;
        }
        self.child_names.insert(child.clone(), name.to_string());
        self.parents.insert(child.clone(), parent.clone());
        true
    }

    pub fn knows(&self, id: &InstanceId) -> bool {
        self.child_names.contains_key(id)
    }

    /// Path of `name` inside the instance `instance_id`.
    pub fn resolve(&self, instance_id: &InstanceId, name: &str) -> ResolvedPath {
        let (segments, anchored) = self.instance_segments(instance_id);
        let prefix = segments
            .iter()
            .fold(String::new(), |acc, segment| join_path(&acc, segment));
        ResolvedPath {
            path: join_path(&prefix, name),
            anchored,
        }
    }

    /// Path segments of an instance from the root, outermost first.
    fn instance_segments(&self, instance_id: &InstanceId) -> (Vec<&str>, bool) {
        let mut segments = Vec::new();
        let mut current = instance_id;
        let mut anchored = false;
        // A well-formed chain is never longer than the number of known
        // instances; anything longer is a cycle.
        for _ in 0..=self.child_names.len() {
            if self.is_root(current) {
                anchored = true;
                break;
            }
            let (Some(name), Some(parent)) =
                (self.child_names.get(current), self.parents.get(current))
            else {
                break;
            };
            segments.push(name.as_str());
            current = parent;
        }
        segments.reverse();
        (segments, anchored)
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
