// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events streamed by the deployment engine.
//!
//! The tracker does not care how events are transported; the serde shape
//! here is what the `dw` host reads from JSON lines.

mod methods;

use crate::durations::{InstanceDurations, LinkDurations, ResourceDurations};
use crate::id::{InstanceId, LinkId, ResourceId};
use crate::snapshot::InstanceState;
use crate::status::{
    InstanceStatus, LinkStatus, PreciseLinkStatus, PreciseResourceStatus, ResourceStatus,
};
use serde::{Deserialize, Serialize};

/// One inbound message from the deployment engine.
///
/// Serializes with `{"type": "resource:update", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "resource:update")]
    ResourceUpdate(ResourceUpdate),

    #[serde(rename = "child:update")]
    ChildUpdate(ChildUpdate),

    #[serde(rename = "link:update")]
    LinkUpdate(LinkUpdate),

    #[serde(rename = "deployment:update")]
    DeploymentUpdate(DeploymentUpdate),

    #[serde(rename = "deployment:finished")]
    DeploymentFinished(DeploymentFinished),

    /// Full state as last known before an automatic rollback began.
    #[serde(rename = "deployment:pre_rollback_state")]
    PreRollbackState(PreRollbackState),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUpdate {
    /// Instance the resource belongs to (the root or a child instance).
    pub instance_id: InstanceId,
    pub resource_id: ResourceId,
    pub resource_name: String,
    #[serde(default)]
    pub group: u32,
    pub status: ResourceStatus,
    #[serde(default)]
    pub precise_status: PreciseResourceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    #[serde(default)]
    pub attempt: u32,
    #[serde(default)]
    pub can_retry: bool,
    #[serde(default)]
    pub update_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<ResourceDurations>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildUpdate {
    pub parent_instance_id: InstanceId,
    pub child_instance_id: InstanceId,
    pub child_name: String,
    #[serde(default)]
    pub group: u32,
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    #[serde(default)]
    pub update_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<InstanceDurations>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkUpdate {
    pub instance_id: InstanceId,
    pub link_id: LinkId,
    /// `"resourceA::resourceB"`
    pub link_name: String,
    pub status: LinkStatus,
    #[serde(default)]
    pub precise_status: PreciseLinkStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    #[serde(default)]
    pub current_stage_attempt: u32,
    #[serde(default)]
    pub can_retry_current_stage: bool,
    #[serde(default)]
    pub update_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<LinkDurations>,
}

/// Status change of the deployment as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentUpdate {
    /// The deployment's own (root) instance ID, when the engine reports it.
    #[serde(default, skip_serializing_if = "InstanceId::is_empty")]
    pub instance_id: InstanceId,
    pub status: InstanceStatus,
    #[serde(default)]
    pub update_timestamp: i64,
}

/// Final message of a deployment stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentFinished {
    #[serde(default, skip_serializing_if = "InstanceId::is_empty")]
    pub instance_id: InstanceId,
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_reasons: Vec<String>,
    #[serde(default)]
    pub finish_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<InstanceDurations>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreRollbackState {
    pub state: InstanceState,
}

crate::builder! {
    pub struct ResourceUpdateBuilder => ResourceUpdate {
        into {
            instance_id: InstanceId = "root",
            resource_id: ResourceId = "res-1",
            resource_name: String = "bucket",
        }
        set {
            group: u32 = 0,
            status: ResourceStatus = ResourceStatus::Creating,
            precise_status: PreciseResourceStatus = PreciseResourceStatus::Creating,
            failure_reasons: Vec<String> = Vec::new(),
            attempt: u32 = 1,
            can_retry: bool = false,
            update_timestamp: i64 = 1_700_000_000,
        }
        option {
            durations: ResourceDurations = None,
        }
    }
}

crate::builder! {
    pub struct ChildUpdateBuilder => ChildUpdate {
        into {
            parent_instance_id: InstanceId = "root",
            child_instance_id: InstanceId = "child-1",
            child_name: String = "network",
        }
        set {
            group: u32 = 0,
            status: InstanceStatus = InstanceStatus::Deploying,
            failure_reasons: Vec<String> = Vec::new(),
            update_timestamp: i64 = 1_700_000_000,
        }
        option {
            durations: InstanceDurations = None,
        }
    }
}

crate::builder! {
    pub struct LinkUpdateBuilder => LinkUpdate {
        into {
            instance_id: InstanceId = "root",
            link_id: LinkId = "link-1",
            link_name: String = "api::table",
        }
        set {
            status: LinkStatus = LinkStatus::Creating,
            precise_status: PreciseLinkStatus = PreciseLinkStatus::UpdatingResourceA,
            failure_reasons: Vec<String> = Vec::new(),
            current_stage_attempt: u32 = 1,
            can_retry_current_stage: bool = false,
            update_timestamp: i64 = 1_700_000_000,
        }
        option {
            durations: LinkDurations = None,
        }
    }
}

#[cfg(test)]
#[path = "../event_tests.rs"]
mod tests;
