// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dw-core: Data model for tracking a streaming blueprint deployment

pub mod macros;

pub mod action;
pub mod changes;
pub mod durations;
pub mod event;
pub mod id;
pub mod item;
pub mod snapshot;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::ItemAction;
pub use changes::{resource_action, BlueprintChanges, FieldChange, LinkChanges, ResourceChanges};
pub use durations::{InstanceDurations, LinkDurations, ResourceDurations};
pub use event::{
    ChildUpdate, DeploymentFinished, DeploymentUpdate, Event, LinkUpdate, PreRollbackState,
    ResourceUpdate,
};
pub use id::{InstanceId, LinkId, ResourceId};
pub use item::{
    is_direct_child_path, join_path, link_name, parent_path, split_link_name, ChildItem, ItemKey,
    ItemKind, ItemRef, LinkItem, ResourceItem, TrackedItem, LINK_NAME_SEPARATOR, PATH_SEPARATOR,
};
pub use snapshot::{InstanceState, LinkState, ResourceState};
pub use status::{
    classify, ElementStatus, InstanceStatus, LinkStatus, PreciseLinkStatus,
    PreciseResourceStatus, ResourceStatus, StatusCategory,
};
