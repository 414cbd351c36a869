// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracked deployment elements: resources, child blueprints, and links.

use crate::action::ItemAction;
use crate::changes::{BlueprintChanges, LinkChanges, ResourceChanges};
use crate::durations::{InstanceDurations, LinkDurations, ResourceDurations};
use crate::id::{InstanceId, LinkId, ResourceId};
use crate::snapshot::{InstanceState, LinkState, ResourceState};
use crate::status::{
    classify, ElementStatus, InstanceStatus, LinkStatus, PreciseLinkStatus, PreciseResourceStatus,
    ResourceStatus, StatusCategory,
};
use serde::{Deserialize, Serialize};

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Separator between the two resource names of a link name.
pub const LINK_NAME_SEPARATOR: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Resource,
    Child,
    Link,
}

crate::simple_display! {
    ItemKind {
        Resource => "resource",
        Child => "child",
        Link => "link",
    }
}

/// Registry address of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub kind: ItemKind,
    pub path: String,
}

impl ItemKey {
    pub fn new(kind: ItemKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn resource(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Resource, path)
    }

    pub fn child(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Child, path)
    }

    pub fn link(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Link, path)
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.path)
    }
}

/// Join a parent path and a short name. An empty parent means the root.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{name}")
    }
}

/// Parent path of `path`, or `None` for a root-level path.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rsplit_once(PATH_SEPARATOR).map(|(parent, _)| parent)
}

/// Whether `path` sits exactly one segment below `parent`.
pub fn is_direct_child_path(parent: &str, path: &str) -> bool {
    parent_path(path) == Some(parent)
}

/// Split a link name into its two resource names.
///
/// A name without `"::"` yields the whole name and an empty second half.
pub fn split_link_name(link_name: &str) -> (String, String) {
    match link_name.split_once(LINK_NAME_SEPARATOR) {
        Some((a, b)) => (a.to_string(), b.to_string()),
        None => (link_name.to_string(), String::new()),
    }
}

pub fn link_name(resource_a: &str, resource_b: &str) -> String {
    format!("{resource_a}{LINK_NAME_SEPARATOR}{resource_b}")
}

/// Behaviour shared by the three element kinds, used by the registries.
pub trait TrackedItem: Clone + std::fmt::Debug {
    const KIND: ItemKind;

    /// Short, locally unique name.
    fn name(&self) -> &str;
    fn path(&self) -> &str;
    fn set_path(&mut self, path: String);

    fn action(&self) -> Option<ItemAction>;
    fn set_action(&mut self, action: Option<ItemAction>);

    /// Assign the planned action. The first assignment sticks.
    fn assign_action(&mut self, action: ItemAction) {
        if self.action().is_none() {
            self.set_action(Some(action));
        }
    }

    fn category(&self) -> StatusCategory;
    fn success_action(&self) -> Option<&'static str>;
    fn failure_reasons(&self) -> &[String];

    fn is_skipped(&self) -> bool;
    /// Never cleared once set.
    fn mark_skipped(&mut self);

    /// Created from an event whose path could not be resolved to the root.
    fn is_provisional(&self) -> bool;
    fn set_provisional(&mut self, provisional: bool);

    /// Instance the path of this item is resolved from: the owning instance
    /// for resources and links, the parent instance for children.
    fn anchor_instance(&self) -> Option<&InstanceId>;

    /// Reclassify an in-progress item as interrupted. Returns whether it changed.
    fn interrupt(&mut self) -> bool;

    /// Merge the observations of a duplicate entry for the same element.
    /// Live fields from `newer` win; static fields fill gaps only.
    fn absorb(&mut self, newer: Self);

    fn key(&self) -> ItemKey {
        ItemKey::new(Self::KIND, self.path())
    }

    fn is_pending(&self) -> bool {
        self.category() == StatusCategory::Pending
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    pub group: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_status: Option<PreciseResourceStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    pub attempt: u32,
    pub can_retry: bool,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<ResourceDurations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<ResourceChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    #[serde(skip)]
    pub provisional: bool,
}

impl ResourceItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Fill identity fields from last-known state without touching live status.
    pub fn hydrate(&mut self, state: &ResourceState) {
        if self.resource_id.is_none() && !state.resource_id.is_empty() {
            self.resource_id = Some(state.resource_id.clone());
        }
        if self.resource_type.is_none() && !state.resource_type.is_empty() {
            self.resource_type = Some(state.resource_type.clone());
        }
        if self.resource_state.is_none() {
            self.resource_state = Some(state.clone());
        }
    }
}

impl TrackedItem for ResourceItem {
    const KIND: ItemKind = ItemKind::Resource;

    fn name(&self) -> &str {
        &self.name
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn set_path(&mut self, path: String) {
        self.path = path;
    }
    fn action(&self) -> Option<ItemAction> {
        self.action
    }
    fn set_action(&mut self, action: Option<ItemAction>) {
        self.action = action;
    }
    fn category(&self) -> StatusCategory {
        classify(self.status)
    }
    fn success_action(&self) -> Option<&'static str> {
        self.status.and_then(ElementStatus::success_action)
    }
    fn failure_reasons(&self) -> &[String] {
        &self.failure_reasons
    }
    fn is_skipped(&self) -> bool {
        self.skipped
    }
    fn mark_skipped(&mut self) {
        self.skipped = true;
    }
    fn is_provisional(&self) -> bool {
        self.provisional
    }
    fn set_provisional(&mut self, provisional: bool) {
        self.provisional = provisional;
    }
    fn anchor_instance(&self) -> Option<&InstanceId> {
        self.instance_id.as_ref()
    }

    fn interrupt(&mut self) -> bool {
        let Some(status) = self.status.filter(|s| s.is_in_progress()) else {
            return false;
        };
        self.status = Some(status.interrupted_for(self.action));
        self.precise_status = self.precise_status.map(|p| p.interrupted_for(self.action));
        self.failure_reasons.clear();
        true
    }

    fn absorb(&mut self, newer: Self) {
        if newer.status.is_some() {
            self.status = newer.status;
            self.precise_status = newer.precise_status;
            self.failure_reasons = newer.failure_reasons;
            self.attempt = newer.attempt;
            self.can_retry = newer.can_retry;
            self.group = newer.group;
        }
        self.skipped |= newer.skipped;
        self.last_update_timestamp = newer.last_update_timestamp.or(self.last_update_timestamp);
        self.durations = newer.durations.or(self.durations.take());
        self.action = self.action.or(newer.action);
        self.resource_id = self.resource_id.take().or(newer.resource_id);
        self.resource_type = self.resource_type.take().or(newer.resource_type);
        self.instance_id = newer.instance_id.or(self.instance_id.take());
        self.changes = self.changes.take().or(newer.changes);
        self.resource_state = self.resource_state.take().or(newer.resource_state);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildItem {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_instance_id: Option<InstanceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_instance_id: Option<InstanceId>,
    pub group: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<InstanceDurations>,
    /// This child's own change sub-tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<BlueprintChanges>,
    /// Last-known state of this child's subtree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<InstanceState>,
    #[serde(skip)]
    pub provisional: bool,
}

impl ChildItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn hydrate(&mut self, state: &InstanceState) {
        if self.child_instance_id.is_none() && !state.instance_id.is_empty() {
            self.child_instance_id = Some(state.instance_id.clone());
        }
        if self.snapshot.is_none() {
            self.snapshot = Some(state.clone());
        }
    }
}

impl TrackedItem for ChildItem {
    const KIND: ItemKind = ItemKind::Child;

    fn name(&self) -> &str {
        &self.name
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn set_path(&mut self, path: String) {
        self.path = path;
    }
    fn action(&self) -> Option<ItemAction> {
        self.action
    }
    fn set_action(&mut self, action: Option<ItemAction>) {
        self.action = action;
    }
    fn category(&self) -> StatusCategory {
        classify(self.status)
    }
    fn success_action(&self) -> Option<&'static str> {
        self.status.and_then(ElementStatus::success_action)
    }
    fn failure_reasons(&self) -> &[String] {
        &self.failure_reasons
    }
    fn is_skipped(&self) -> bool {
        self.skipped
    }
    fn mark_skipped(&mut self) {
        self.skipped = true;
    }
    fn is_provisional(&self) -> bool {
        self.provisional
    }
    fn set_provisional(&mut self, provisional: bool) {
        self.provisional = provisional;
    }
    fn anchor_instance(&self) -> Option<&InstanceId> {
        self.parent_instance_id.as_ref()
    }

    fn interrupt(&mut self) -> bool {
        let Some(status) = self.status.filter(|s| s.is_in_progress()) else {
            return false;
        };
        self.status = Some(status.interrupted_for(self.action));
        self.failure_reasons.clear();
        true
    }

    fn absorb(&mut self, newer: Self) {
        if newer.status.is_some() {
            self.status = newer.status;
            self.failure_reasons = newer.failure_reasons;
            self.group = newer.group;
        }
        self.skipped |= newer.skipped;
        self.last_update_timestamp = newer.last_update_timestamp.or(self.last_update_timestamp);
        self.durations = newer.durations.or(self.durations.take());
        self.action = self.action.or(newer.action);
        self.child_instance_id = newer.child_instance_id.or(self.child_instance_id.take());
        self.parent_instance_id = newer.parent_instance_id.or(self.parent_instance_id.take());
        self.changes = self.changes.take().or(newer.changes);
        self.snapshot = self.snapshot.take().or(newer.snapshot);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub link_name: String,
    pub resource_a_name: String,
    pub resource_b_name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_status: Option<PreciseLinkStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    pub current_stage_attempt: u32,
    pub can_retry_current_stage: bool,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<LinkDurations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<LinkChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_state: Option<LinkState>,
    #[serde(skip)]
    pub provisional: bool,
}

impl LinkItem {
    /// Endpoint names are derived from the link name.
    pub fn new(link_name: impl Into<String>, path: impl Into<String>) -> Self {
        let link_name = link_name.into();
        let (resource_a_name, resource_b_name) = split_link_name(&link_name);
        Self {
            link_name,
            resource_a_name,
            resource_b_name,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn hydrate(&mut self, state: &LinkState) {
        if self.link_id.is_none() && !state.link_id.is_empty() {
            self.link_id = Some(state.link_id.clone());
        }
        if self.link_state.is_none() {
            self.link_state = Some(state.clone());
        }
    }
}

impl TrackedItem for LinkItem {
    const KIND: ItemKind = ItemKind::Link;

    fn name(&self) -> &str {
        &self.link_name
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn set_path(&mut self, path: String) {
        self.path = path;
    }
    fn action(&self) -> Option<ItemAction> {
        self.action
    }
    fn set_action(&mut self, action: Option<ItemAction>) {
        self.action = action;
    }
    fn category(&self) -> StatusCategory {
        classify(self.status)
    }
    fn success_action(&self) -> Option<&'static str> {
        self.status.and_then(ElementStatus::success_action)
    }
    fn failure_reasons(&self) -> &[String] {
        &self.failure_reasons
    }
    fn is_skipped(&self) -> bool {
        self.skipped
    }
    fn mark_skipped(&mut self) {
        self.skipped = true;
    }
    fn is_provisional(&self) -> bool {
        self.provisional
    }
    fn set_provisional(&mut self, provisional: bool) {
        self.provisional = provisional;
    }
    fn anchor_instance(&self) -> Option<&InstanceId> {
        self.instance_id.as_ref()
    }

    fn interrupt(&mut self) -> bool {
        let Some(status) = self.status.filter(|s| s.is_in_progress()) else {
            return false;
        };
        self.status = Some(status.interrupted_for(self.action));
        self.precise_status = self.precise_status.map(|p| p.interrupted_for(self.action));
        self.failure_reasons.clear();
        true
    }

    fn absorb(&mut self, newer: Self) {
        if newer.status.is_some() {
            self.status = newer.status;
            self.precise_status = newer.precise_status;
            self.failure_reasons = newer.failure_reasons;
            self.current_stage_attempt = newer.current_stage_attempt;
            self.can_retry_current_stage = newer.can_retry_current_stage;
        }
        self.skipped |= newer.skipped;
        self.last_update_timestamp = newer.last_update_timestamp.or(self.last_update_timestamp);
        self.durations = newer.durations.or(self.durations.take());
        self.action = self.action.or(newer.action);
        self.link_id = self.link_id.take().or(newer.link_id);
        self.instance_id = newer.instance_id.or(self.instance_id.take());
        self.changes = self.changes.take().or(newer.changes);
        self.link_state = self.link_state.take().or(newer.link_state);
    }
}

/// Borrowed view of any tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemRef<'a> {
    Resource(&'a ResourceItem),
    Child(&'a ChildItem),
    Link(&'a LinkItem),
}

impl<'a> ItemRef<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemRef::Resource(_) => ItemKind::Resource,
            ItemRef::Child(_) => ItemKind::Child,
            ItemRef::Link(_) => ItemKind::Link,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            ItemRef::Resource(r) => &r.name,
            ItemRef::Child(c) => &c.name,
            ItemRef::Link(l) => &l.link_name,
        }
    }

    pub fn path(&self) -> &'a str {
        match self {
            ItemRef::Resource(r) => &r.path,
            ItemRef::Child(c) => &c.path,
            ItemRef::Link(l) => &l.path,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.kind(), self.path())
    }

    pub fn action(&self) -> Option<ItemAction> {
        match self {
            ItemRef::Resource(r) => r.action,
            ItemRef::Child(c) => c.action,
            ItemRef::Link(l) => l.action,
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            ItemRef::Resource(r) => r.category(),
            ItemRef::Child(c) => c.category(),
            ItemRef::Link(l) => l.category(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        match self {
            ItemRef::Resource(r) => r.skipped,
            ItemRef::Child(c) => c.skipped,
            ItemRef::Link(l) => l.skipped,
        }
    }

    pub fn failure_reasons(&self) -> &'a [String] {
        match self {
            ItemRef::Resource(r) => &r.failure_reasons,
            ItemRef::Child(c) => &c.failure_reasons,
            ItemRef::Link(l) => &l.failure_reasons,
        }
    }

    pub fn success_action(&self) -> Option<&'static str> {
        match self {
            ItemRef::Resource(r) => r.success_action(),
            ItemRef::Child(c) => c.success_action(),
            ItemRef::Link(l) => l.success_action(),
        }
    }

    /// Human-readable status. Falls back to the last-known state, then to
    /// `"pending"` when nothing has been reported yet.
    pub fn status_label(&self) -> String {
        let label = match self {
            ItemRef::Resource(r) => r
                .status
                .or_else(|| r.resource_state.as_ref().and_then(|s| s.status))
                .map(|s| s.to_string()),
            ItemRef::Child(c) => c
                .status
                .or_else(|| c.snapshot.as_ref().and_then(|s| s.status))
                .map(|s| s.to_string()),
            ItemRef::Link(l) => l
                .status
                .or_else(|| l.link_state.as_ref().and_then(|s| s.status))
                .map(|s| s.to_string()),
        };
        label.unwrap_or_else(|| StatusCategory::Pending.to_string())
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
