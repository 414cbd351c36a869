// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment tracker state derived from the event stream

mod children;
mod deployment;
mod links;
mod resources;

use crate::paths::{PathResolver, ResolvedPath};
use crate::store::Registry;
use dw_core::{
    parent_path, ChildItem, Event, InstanceDurations, InstanceId, InstanceState, InstanceStatus,
    ItemKey, ItemKind, ItemRef, LinkItem, ResourceItem, TrackedItem,
};
use serde::{Deserialize, Serialize};

/// Tracker settings supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// The deployment's own instance ID. Learned from the snapshot or
    /// deployment events when not configured.
    #[serde(default)]
    pub instance_id: Option<InstanceId>,
}

/// State of the deployment as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeploymentState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    /// Set by `deployment:finished`; halt propagation runs at most once
    /// before this is set.
    pub finished: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<InstanceDurations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_rollback_state: Option<InstanceState>,
}

/// Incrementally maintained view of a deployment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tracker {
    #[serde(skip)]
    pub(crate) paths: PathResolver,
    pub(crate) resources: Registry<ResourceItem>,
    pub(crate) children: Registry<ChildItem>,
    pub(crate) links: Registry<LinkItem>,
    /// Ordered root-level elements.
    pub(crate) top_level: Vec<ItemKey>,
    pub(crate) deployment: DeploymentState,
    /// Seeded from a snapshot alone; no change description applies.
    pub(crate) inspect: bool,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            paths: PathResolver::new(config.instance_id),
            ..Default::default()
        }
    }

    pub fn root_instance_id(&self) -> Option<&InstanceId> {
        self.paths.root()
    }

    pub fn resources(&self) -> &Registry<ResourceItem> {
        &self.resources
    }

    pub fn children(&self) -> &Registry<ChildItem> {
        &self.children
    }

    pub fn links(&self) -> &Registry<LinkItem> {
        &self.links
    }

    pub fn deployment(&self) -> &DeploymentState {
        &self.deployment
    }

    pub fn is_inspect(&self) -> bool {
        self.inspect
    }

    /// Keys of the root-level elements in display order.
    pub fn top_level_keys(&self) -> &[ItemKey] {
        &self.top_level
    }

    pub fn top_level(&self) -> Vec<ItemRef<'_>> {
        self.top_level
            .iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    pub fn get(&self, key: &ItemKey) -> Option<ItemRef<'_>> {
        match key.kind {
            ItemKind::Resource => self.resources.get(&key.path).map(ItemRef::Resource),
            ItemKind::Child => self.children.get(&key.path).map(ItemRef::Child),
            ItemKind::Link => self.links.get(&key.path).map(ItemRef::Link),
        }
    }

    /// Path an element of `instance_id` named `name` resolves to right now.
    pub fn resolve_path(&self, instance_id: &InstanceId, name: &str) -> ResolvedPath {
        self.paths.resolve(instance_id, name)
    }

    /// Apply one inbound event.
    ///
    /// Events for the same element are applied in arrival order; replaying
    /// an event leaves the same state as applying it once.
    pub fn apply_event(&mut self, event: &Event) {
        tracing::debug!(event = %event.log_summary(), "applying event");
        match event {
            Event::ResourceUpdate(update) => resources::apply(self, update),
            Event::ChildUpdate(update) => children::apply(self, update),
            Event::LinkUpdate(update) => links::apply(self, update),
            Event::DeploymentUpdate(_)
            | Event::DeploymentFinished(_)
            | Event::PreRollbackState(_) => deployment::apply(self, event),
        }
    }

    pub(crate) fn push_top_level(&mut self, key: ItemKey) {
        if !self.top_level.contains(&key) {
            self.top_level.push(key);
        }
    }

    /// Learn the root instance ID and re-anchor anything waiting on it.
    pub(crate) fn adopt_root(&mut self, id: &InstanceId) {
        if self.paths.adopt_root(id) {
            tracing::info!(instance = %id, "adopted root instance");
            self.reanchor();
        }
    }

    /// Move provisional entries whose ancestry is now fully known to their
    /// full paths.
    pub(crate) fn reanchor(&mut self) {
        let mut anchored = Vec::new();
        reanchor_registry(&mut self.resources, &self.paths, &mut anchored);
        reanchor_registry(&mut self.children, &self.paths, &mut anchored);
        reanchor_registry(&mut self.links, &self.paths, &mut anchored);
        for key in anchored {
            if parent_path(&key.path).is_none() {
                self.push_top_level(key);
            }
        }
    }
}

/// Find or create the entry for an element reported by an event.
///
/// Provisional and anchored entries never merge across instances: whichever
/// side is provisional is moved to a parked key that cannot collide with
/// a real path.
pub(crate) fn locate<'a, T: TrackedItem>(
    registry: &'a mut Registry<T>,
    top_level: &mut Vec<ItemKey>,
    resolved: &ResolvedPath,
    instance: &InstanceId,
    name: &str,
    create: impl FnOnce(String) -> T,
) -> Option<&'a mut T> {
    let same_instance = |item: &T| match item.anchor_instance() {
        Some(anchor) => anchor == instance,
        None => true,
    };

    let mut path = resolved.path.clone();
    if let Some(existing) = registry.get(&path) {
        if existing.is_provisional() && !same_instance(existing) {
            if resolved.anchored {
                let parked = parked_path(existing.anchor_instance(), &path);
                registry.relocate(&path, &parked);
            } else {
                path = parked_path(Some(instance), &path);
            }
        } else if !existing.is_provisional() && !resolved.anchored {
            path = parked_path(Some(instance), &path);
        }
    }

    let existing = registry.lookup_or_migrate_if(&path, name, same_instance);
    if existing.is_none() {
        registry.insert(create(path.clone()));
        if !resolved.anchored {
            tracing::warn!(
                kind = %T::KIND,
                path = %path,
                instance = %instance,
                "element is not anchored to the root yet"
            );
        }
        if resolved.anchored && parent_path(&path).is_none() {
            let key = ItemKey::new(T::KIND, path.clone());
            if !top_level.contains(&key) {
                top_level.push(key);
            }
        }
    }
    let item = registry.get_mut(&path)?;
    item.set_provisional(!resolved.anchored);
    Some(item)
}

/// Whether `instance` should be adopted as the unknown root because it
/// reports an element planned at root level that no event has claimed yet.
pub(crate) fn claims_planned_root<T: TrackedItem>(
    registry: &Registry<T>,
    paths: &PathResolver,
    instance: &InstanceId,
    name: &str,
) -> bool {
    if paths.root().is_some() || instance.is_empty() || paths.knows(instance) {
        return false;
    }
    registry
        .get(name)
        .is_some_and(|item| !item.is_provisional() && item.anchor_instance().is_none())
}

/// Move a provisional occupant of `path` aside before a planned element
/// claims the path. Re-anchoring merges it back if it belongs there.
pub(crate) fn park_provisional<T: TrackedItem>(registry: &mut Registry<T>, path: &str) {
    let Some(occupant) = registry.get(path).filter(|item| item.is_provisional()) else {
        return;
    };
    let parked = parked_path(occupant.anchor_instance(), path);
    registry.relocate(path, &parked);
}

fn parked_path(instance: Option<&InstanceId>, path: &str) -> String {
    match instance {
        Some(instance) => format!("{path}#{instance}"),
        None => format!("{path}#"),
    }
}

fn reanchor_registry<T: TrackedItem>(
    registry: &mut Registry<T>,
    paths: &PathResolver,
    anchored: &mut Vec<ItemKey>,
) {
    for from in registry.provisional_paths() {
        let Some(item) = registry.get(&from) else {
            continue;
        };
        let Some(instance) = item.anchor_instance().cloned() else {
            continue;
        };
        let resolved = paths.resolve(&instance, item.name());
        if !resolved.anchored {
            continue;
        }
        if let Some(occupant) = registry.get(&resolved.path) {
            if occupant.is_provisional() && occupant.anchor_instance() != Some(&instance) {
                let parked = parked_path(occupant.anchor_instance(), &resolved.path);
                registry.relocate(&resolved.path, &parked);
            }
        }
        registry.relocate(&from, &resolved.path);
        if let Some(item) = registry.get_mut(&resolved.path) {
            item.set_provisional(false);
        }
        tracing::debug!(kind = %T::KIND, from = %from, to = %resolved.path, "re-anchored element");
        anchored.push(ItemKey::new(T::KIND, resolved.path));
    }
}

#[cfg(test)]
#[path = "../tracker_tests/mod.rs"]
mod tests;
