// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Last-known infrastructure state, recursively shaped like the blueprint.

use crate::id::{InstanceId, LinkId, ResourceId};
use crate::status::{
    InstanceStatus, LinkStatus, PreciseLinkStatus, PreciseResourceStatus, ResourceStatus,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snapshot of one blueprint instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceState {
    pub instance_id: InstanceId,
    pub instance_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    /// Keyed by resource ID.
    pub resources: IndexMap<String, ResourceState>,
    /// Resource name → resource ID.
    pub resource_ids: IndexMap<String, ResourceId>,
    /// Keyed by child name.
    pub child_blueprints: IndexMap<String, InstanceState>,
    /// Keyed by link name.
    pub links: IndexMap<String, LinkState>,
}

impl InstanceState {
    /// Find a resource by name, via the name index first and a scan second.
    pub fn resource_by_name(&self, name: &str) -> Option<&ResourceState> {
        self.resource_ids
            .get(name)
            .and_then(|id| self.resources.get(id.as_str()))
            .or_else(|| self.resources.values().find(|r| r.name == name))
    }

    pub fn child(&self, name: &str) -> Option<&InstanceState> {
        self.child_blueprints.get(name)
    }

    pub fn link(&self, name: &str) -> Option<&LinkState> {
        self.links.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceState {
    pub resource_id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub instance_id: InstanceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_status: Option<PreciseResourceStatus>,
    pub failure_reasons: Vec<String>,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub spec_data: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_deployed_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkState {
    pub link_id: LinkId,
    pub name: String,
    pub instance_id: InstanceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_status: Option<PreciseLinkStatus>,
    pub failure_reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_deployed_timestamp: Option<i64>,
}
