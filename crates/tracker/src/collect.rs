// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-deployment result collection.

use crate::levels::planned_entries;
use crate::tracker::Tracker;
use dw_core::{
    join_path, parent_path, ChildItem, ItemKey, ItemKind, ItemRef, StatusCategory, TrackedItem,
    PATH_SEPARATOR,
};
use serde::Serialize;
use std::collections::HashSet;

/// Separator between levels of a display path.
pub const DISPLAY_PATH_SEPARATOR: &str = "::";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessfulElement {
    pub kind: ItemKind,
    pub name: String,
    pub path: String,
    /// Past-tense verb for what happened, e.g. `"created"`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedElement {
    pub kind: ItemKind,
    pub name: String,
    pub path: String,
    pub failure_reasons: Vec<String>,
}

/// An element that was interrupted or never started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HaltedElement {
    pub kind: ItemKind,
    pub name: String,
    pub path: String,
}

/// Per-element outcome of a deployment. Every element appears in at most
/// one of `successful`, `failed`, and `interrupted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentSummary {
    pub successful: Vec<SuccessfulElement>,
    pub failed: Vec<FailedElement>,
    pub interrupted: Vec<HaltedElement>,
    pub skipped: Vec<HaltedElement>,
}

impl DeploymentSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn has_interruptions(&self) -> bool {
        !self.interrupted.is_empty()
    }
}

/// Display path segment prefix for an element kind.
pub fn kind_segment(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Resource => "resources",
        ItemKind::Child => "children",
        ItemKind::Link => "links",
    }
}

/// Extend a parent display path with one element,
/// e.g. `children.core::resources.bucket`.
pub fn display_path(parent: &str, kind: ItemKind, name: &str) -> String {
    let segment = format!("{}.{name}", kind_segment(kind));
    if parent.is_empty() {
        segment
    } else {
        format!("{parent}{DISPLAY_PATH_SEPARATOR}{segment}")
    }
}

/// Display path of the parent of a registry path; every ancestor is a child.
fn ancestor_display_path(path: &str) -> String {
    parent_path(path)
        .map(|parent| {
            parent
                .split(PATH_SEPARATOR)
                .fold(String::new(), |acc, name| {
                    display_path(&acc, ItemKind::Child, name)
                })
        })
        .unwrap_or_default()
}

#[derive(Default)]
struct Collector {
    visited: HashSet<ItemKey>,
    summary: DeploymentSummary,
}

impl Tracker {
    /// Walk every tracked element and classify its outcome.
    ///
    /// Root-level elements are visited in display order, descending into
    /// children; elements not reachable that way (including any still
    /// provisional) follow in registry order.
    pub fn summary(&self) -> DeploymentSummary {
        let mut collector = Collector::default();
        for key in &self.top_level {
            self.collect(key, "", &mut collector);
        }

        let remaining = self
            .resources
            .values()
            .map(TrackedItem::key)
            .chain(self.children.values().map(TrackedItem::key))
            .chain(self.links.values().map(TrackedItem::key));
        for key in remaining {
            if !collector.visited.contains(&key) {
                let parent = ancestor_display_path(&key.path);
                self.collect(&key, &parent, &mut collector);
            }
        }

        let summary = collector.summary;
        tracing::debug!(
            successful = summary.successful.len(),
            failed = summary.failed.len(),
            interrupted = summary.interrupted.len(),
            skipped = summary.skipped.len(),
            "collected deployment summary"
        );
        summary
    }

    fn collect(&self, key: &ItemKey, parent_display: &str, collector: &mut Collector) {
        if !collector.visited.insert(key.clone()) {
            return;
        }
        let Some(item) = self.get(key) else {
            return;
        };
        let path = display_path(parent_display, key.kind, item.name());
        classify_into(&item, &path, &mut collector.summary);

        if let ItemRef::Child(child) = item {
            for nested in self.summary_children(child) {
                self.collect(&nested, &path, collector);
            }
        }
    }

    /// Registered contents of a child: its planned elements first, then
    /// anything else events placed beneath it.
    fn summary_children(&self, child: &ChildItem) -> Vec<ItemKey> {
        let mut keys = Vec::new();
        let mut push = |key: ItemKey| {
            if !keys.contains(&key) {
                keys.push(key);
            }
        };
        for entry in child.changes.iter().flat_map(planned_entries) {
            let key = ItemKey::new(entry.kind, join_path(&child.path, &entry.name));
            if self.get(&key).is_some() {
                push(key);
            }
        }
        for (kind, _, path) in self.tracked_beneath(&child.path) {
            push(ItemKey::new(kind, path));
        }
        keys
    }
}

fn classify_into(item: &ItemRef<'_>, path: &str, summary: &mut DeploymentSummary) {
    let kind = item.kind();
    let name = item.name().to_string();
    match item.category() {
        StatusCategory::Succeeded => {
            let action = item
                .success_action()
                .map(str::to_string)
                .or_else(|| item.action().map(|a| a.to_string()))
                .unwrap_or_default();
            summary.successful.push(SuccessfulElement {
                kind,
                name: name.clone(),
                path: path.to_string(),
                action,
            });
        }
        StatusCategory::Failed if !item.failure_reasons().is_empty() => {
            summary.failed.push(FailedElement {
                kind,
                name: name.clone(),
                path: path.to_string(),
                failure_reasons: item.failure_reasons().to_vec(),
            });
        }
        StatusCategory::Interrupted => {
            summary.interrupted.push(HaltedElement {
                kind,
                name: name.clone(),
                path: path.to_string(),
            });
        }
        _ => {}
    }
    if item.is_skipped() {
        summary.skipped.push(HaltedElement {
            kind,
            name,
            path: path.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
