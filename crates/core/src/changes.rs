// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change description: the static, recursively nested plan of what a
//! deployment will create, update, recreate, and remove.

use crate::action::ItemAction;
use crate::id::ResourceId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Changes at one nesting level of a blueprint.
///
/// New children carry a `BlueprintChanges` holding only `new_*` entries, so a
/// single recursive shape describes the whole plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintChanges {
    pub new_resources: IndexMap<String, ResourceChanges>,
    pub resource_changes: IndexMap<String, ResourceChanges>,
    pub removed_resources: Vec<String>,
    /// Link names (`"resourceA::resourceB"`) removed at this level.
    pub removed_links: Vec<String>,
    pub new_children: IndexMap<String, BlueprintChanges>,
    pub child_changes: IndexMap<String, BlueprintChanges>,
    pub recreate_children: Vec<String>,
    pub removed_children: Vec<String>,
}

impl BlueprintChanges {
    pub fn is_empty(&self) -> bool {
        self.new_resources.is_empty()
            && self.resource_changes.is_empty()
            && self.removed_resources.is_empty()
            && self.removed_links.is_empty()
            && self.new_children.is_empty()
            && self.child_changes.is_empty()
            && self.recreate_children.is_empty()
            && self.removed_children.is_empty()
    }

    /// Action for a changed child: recreation wins over an in-place update.
    pub fn changed_child_action(&self, name: &str) -> ItemAction {
        if self.recreate_children.iter().any(|c| c == name) {
            ItemAction::Recreate
        } else {
            ItemAction::Update
        }
    }
}

/// Planned changes for a single resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// The change can only be applied by destroying and re-creating the resource.
    pub must_recreate: bool,
    pub modified_fields: Vec<FieldChange>,
    pub new_fields: Vec<FieldChange>,
    pub removed_fields: Vec<String>,
    pub unchanged_fields: Vec<String>,
    /// Fields whose values are only resolved during deployment.
    pub field_changes_known_on_deploy: Vec<String>,
    /// Keyed by the name of the linked-to resource.
    pub new_outbound_links: IndexMap<String, LinkChanges>,
    pub outbound_link_changes: IndexMap<String, LinkChanges>,
    pub removed_outbound_links: Vec<String>,
}

impl ResourceChanges {
    pub fn has_field_changes(&self) -> bool {
        !self.modified_fields.is_empty()
            || !self.new_fields.is_empty()
            || !self.removed_fields.is_empty()
            || !self.field_changes_known_on_deploy.is_empty()
    }

    pub fn has_link_changes(&self) -> bool {
        !self.new_outbound_links.is_empty()
            || !self.outbound_link_changes.is_empty()
            || !self.removed_outbound_links.is_empty()
    }
}

/// Action for a changed resource.
///
/// Recreation takes precedence over field changes; a resource whose only
/// changes are to its outbound links is itself left unchanged.
pub fn resource_action(changes: &ResourceChanges) -> ItemAction {
    if changes.must_recreate {
        ItemAction::Recreate
    } else if changes.has_field_changes() {
        ItemAction::Update
    } else {
        ItemAction::NoChange
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldChange {
    pub field_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<serde_json::Value>,
    pub must_recreate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkChanges {
    pub modified_fields: Vec<FieldChange>,
    pub new_fields: Vec<FieldChange>,
    pub removed_fields: Vec<String>,
    pub unchanged_fields: Vec<String>,
    pub field_changes_known_on_deploy: Vec<String>,
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
