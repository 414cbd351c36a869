// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    BlueprintChanges, ChildUpdate, DeploymentFinished, DeploymentUpdate, Event, InstanceState,
    InstanceStatus, LinkState, LinkStatus, LinkUpdate, ResourceChanges, ResourceId, ResourceState,
    ResourceStatus, ResourceUpdate,
};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for status codes.
pub mod strategies {
    use crate::status::{InstanceStatus, ResourceStatus};
    use proptest::prelude::*;

    pub fn arb_resource_status() -> impl Strategy<Value = ResourceStatus> {
        prop_oneof![
            Just(ResourceStatus::Unknown),
            Just(ResourceStatus::Creating),
            Just(ResourceStatus::Created),
            Just(ResourceStatus::CreateFailed),
            Just(ResourceStatus::CreateInterrupted),
            Just(ResourceStatus::Updating),
            Just(ResourceStatus::Updated),
            Just(ResourceStatus::UpdateFailed),
            Just(ResourceStatus::Destroying),
            Just(ResourceStatus::Destroyed),
            Just(ResourceStatus::RollingBack),
            Just(ResourceStatus::RollbackFailed),
            Just(ResourceStatus::RollbackComplete),
        ]
    }

    pub fn arb_instance_status() -> impl Strategy<Value = InstanceStatus> {
        prop_oneof![
            Just(InstanceStatus::Preparing),
            Just(InstanceStatus::Deploying),
            Just(InstanceStatus::Deployed),
            Just(InstanceStatus::DeployFailed),
            Just(InstanceStatus::DeployRollingBack),
            Just(InstanceStatus::DeployRollbackComplete),
            Just(InstanceStatus::Updating),
            Just(InstanceStatus::Updated),
            Just(InstanceStatus::UpdateRollbackFailed),
        ]
    }
}

// ── Event factory functions ─────────────────────────────────────────────────

pub fn resource_event(instance_id: &str, name: &str, status: ResourceStatus) -> Event {
    Event::ResourceUpdate(
        ResourceUpdate::builder()
            .instance_id(instance_id)
            .resource_id(format!("{name}-id"))
            .resource_name(name)
            .status(status)
            .precise_status(Default::default())
            .build(),
    )
}

pub fn resource_failed_event(instance_id: &str, name: &str, reasons: &[&str]) -> Event {
    Event::ResourceUpdate(
        ResourceUpdate::builder()
            .instance_id(instance_id)
            .resource_id(format!("{name}-id"))
            .resource_name(name)
            .status(ResourceStatus::CreateFailed)
            .precise_status(Default::default())
            .failure_reasons(reasons.iter().map(|r| r.to_string()).collect())
            .build(),
    )
}

pub fn child_event(
    parent: &str,
    child_instance: &str,
    name: &str,
    status: InstanceStatus,
) -> Event {
    Event::ChildUpdate(
        ChildUpdate::builder()
            .parent_instance_id(parent)
            .child_instance_id(child_instance)
            .child_name(name)
            .status(status)
            .build(),
    )
}

pub fn link_event(instance_id: &str, name: &str, status: LinkStatus) -> Event {
    Event::LinkUpdate(
        LinkUpdate::builder()
            .instance_id(instance_id)
            .link_id(format!("{name}-id"))
            .link_name(name)
            .status(status)
            .precise_status(Default::default())
            .build(),
    )
}

pub fn deployment_event(status: InstanceStatus) -> Event {
    Event::DeploymentUpdate(DeploymentUpdate {
        instance_id: Default::default(),
        status,
        update_timestamp: 1_700_000_100,
    })
}

pub fn finished_event(status: InstanceStatus, reasons: &[&str]) -> Event {
    Event::DeploymentFinished(DeploymentFinished {
        instance_id: Default::default(),
        status,
        failure_reasons: reasons.iter().map(|r| r.to_string()).collect(),
        finish_timestamp: 1_700_000_200,
        durations: None,
    })
}

// ── Change description and snapshot helpers ─────────────────────────────────

/// Change description with the given new resources at one level.
pub fn new_resources(names: &[&str]) -> BlueprintChanges {
    BlueprintChanges {
        new_resources: names
            .iter()
            .map(|n| (n.to_string(), ResourceChanges::default()))
            .collect(),
        ..Default::default()
    }
}

/// Snapshot with the given resources (IDs are `{name}-id`) and links.
pub fn snapshot(resources: &[&str], links: &[&str]) -> InstanceState {
    let mut state = InstanceState {
        instance_id: "root".into(),
        ..Default::default()
    };
    for name in resources {
        let id = ResourceId::new(format!("{name}-id"));
        state.resource_ids.insert(name.to_string(), id.clone());
        state.resources.insert(
            id.to_string(),
            ResourceState {
                resource_id: id,
                name: name.to_string(),
                resource_type: "test/resource".to_string(),
                status: Some(ResourceStatus::Created),
                ..Default::default()
            },
        );
    }
    for name in links {
        state.links.insert(
            name.to_string(),
            LinkState {
                link_id: format!("{name}-id").into(),
                name: name.to_string(),
                status: Some(LinkStatus::Created),
                ..Default::default()
            },
        );
    }
    state
}
