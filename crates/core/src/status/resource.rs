// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource status codes.

use super::{ElementStatus, StatusCategory};
use crate::action::ItemAction;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle status of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Creating,
    Created,
    CreateFailed,
    CreateInterrupted,
    Updating,
    Updated,
    UpdateFailed,
    UpdateInterrupted,
    Destroying,
    Destroyed,
    DestroyFailed,
    DestroyInterrupted,
    RollingBack,
    RollbackFailed,
    RollbackComplete,
    /// Any status code not listed above.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ElementStatus for ResourceStatus {
    fn category(self) -> StatusCategory {
        match self {
            ResourceStatus::Unknown => StatusCategory::Pending,
            ResourceStatus::Creating | ResourceStatus::Updating | ResourceStatus::Destroying => {
                StatusCategory::InProgress
            }
            ResourceStatus::RollingBack => StatusCategory::RollingBack,
            ResourceStatus::Created
            | ResourceStatus::Updated
            | ResourceStatus::Destroyed
            | ResourceStatus::RollbackComplete => StatusCategory::Succeeded,
            ResourceStatus::CreateFailed
            | ResourceStatus::UpdateFailed
            | ResourceStatus::DestroyFailed
            | ResourceStatus::RollbackFailed => StatusCategory::Failed,
            ResourceStatus::CreateInterrupted
            | ResourceStatus::UpdateInterrupted
            | ResourceStatus::DestroyInterrupted => StatusCategory::Interrupted,
        }
    }

    fn is_rollback_terminal(self) -> bool {
        matches!(
            self,
            ResourceStatus::RollbackFailed | ResourceStatus::RollbackComplete
        )
    }

    fn interrupted_for(self, action: Option<ItemAction>) -> Self {
        match action {
            Some(ItemAction::Create) => ResourceStatus::CreateInterrupted,
            Some(ItemAction::Update | ItemAction::Recreate) => ResourceStatus::UpdateInterrupted,
            Some(ItemAction::Delete) => ResourceStatus::DestroyInterrupted,
            _ => match self {
                ResourceStatus::Creating => ResourceStatus::CreateInterrupted,
                ResourceStatus::Updating => ResourceStatus::UpdateInterrupted,
                ResourceStatus::Destroying => ResourceStatus::DestroyInterrupted,
                other => other,
            },
        }
    }

    fn success_action(self) -> Option<&'static str> {
        match self {
            ResourceStatus::Created => Some("created"),
            ResourceStatus::Updated => Some("updated"),
            ResourceStatus::Destroyed => Some("destroyed"),
            ResourceStatus::RollbackComplete => Some("rolled back"),
            _ => None,
        }
    }
}

crate::simple_display! {
    ResourceStatus {
        Unknown => "unknown",
        Creating => "creating",
        Created => "created",
        CreateFailed => "create failed",
        CreateInterrupted => "create interrupted",
        Updating => "updating",
        Updated => "updated",
        UpdateFailed => "update failed",
        UpdateInterrupted => "update interrupted",
        Destroying => "destroying",
        Destroyed => "destroyed",
        DestroyFailed => "destroy failed",
        DestroyInterrupted => "destroy interrupted",
        RollingBack => "rolling back",
        RollbackFailed => "rollback failed",
        RollbackComplete => "rolled back",
    }
}

/// Fine-grained resource status, distinguishing config-complete stages and
/// per-operation rollbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreciseResourceStatus {
    Creating,
    /// Configuration applied; waiting for the resource to stabilise.
    ConfigComplete,
    Created,
    CreateFailed,
    CreateInterrupted,
    CreateRollingBack,
    CreateRollbackFailed,
    CreateRollbackComplete,
    Updating,
    UpdateConfigComplete,
    Updated,
    UpdateFailed,
    UpdateInterrupted,
    UpdateRollingBack,
    UpdateRollbackFailed,
    UpdateRollbackConfigComplete,
    UpdateRollbackComplete,
    Destroying,
    Destroyed,
    DestroyFailed,
    DestroyInterrupted,
    DestroyRollingBack,
    DestroyRollbackFailed,
    DestroyRollbackConfigComplete,
    DestroyRollbackComplete,
    /// Any status code not listed above.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ElementStatus for PreciseResourceStatus {
    fn category(self) -> StatusCategory {
        use PreciseResourceStatus as P;
        match self {
            P::Unknown => StatusCategory::Pending,
            P::Creating
            | P::ConfigComplete
            | P::Updating
            | P::UpdateConfigComplete
            | P::Destroying => StatusCategory::InProgress,
            P::CreateRollingBack
            | P::UpdateRollingBack
            | P::UpdateRollbackConfigComplete
            | P::DestroyRollingBack
            | P::DestroyRollbackConfigComplete => StatusCategory::RollingBack,
            P::Created
            | P::Updated
            | P::Destroyed
            | P::CreateRollbackComplete
            | P::UpdateRollbackComplete
            | P::DestroyRollbackComplete => StatusCategory::Succeeded,
            P::CreateFailed
            | P::UpdateFailed
            | P::DestroyFailed
            | P::CreateRollbackFailed
            | P::UpdateRollbackFailed
            | P::DestroyRollbackFailed => StatusCategory::Failed,
            P::CreateInterrupted | P::UpdateInterrupted | P::DestroyInterrupted => {
                StatusCategory::Interrupted
            }
        }
    }

    fn is_rollback_terminal(self) -> bool {
        use PreciseResourceStatus as P;
        matches!(
            self,
            P::CreateRollbackFailed
                | P::CreateRollbackComplete
                | P::UpdateRollbackFailed
                | P::UpdateRollbackComplete
                | P::DestroyRollbackFailed
                | P::DestroyRollbackComplete
        )
    }

    fn interrupted_for(self, action: Option<ItemAction>) -> Self {
        use PreciseResourceStatus as P;
        match action {
            Some(ItemAction::Create) => P::CreateInterrupted,
            Some(ItemAction::Update | ItemAction::Recreate) => P::UpdateInterrupted,
            Some(ItemAction::Delete) => P::DestroyInterrupted,
            _ => match self {
                P::Creating | P::ConfigComplete => P::CreateInterrupted,
                P::Updating | P::UpdateConfigComplete => P::UpdateInterrupted,
                P::Destroying => P::DestroyInterrupted,
                other => other,
            },
        }
    }

    fn success_action(self) -> Option<&'static str> {
        use PreciseResourceStatus as P;
        match self {
            P::Created => Some("created"),
            P::Updated => Some("updated"),
            P::Destroyed => Some("destroyed"),
            P::CreateRollbackComplete | P::UpdateRollbackComplete | P::DestroyRollbackComplete => {
                Some("rolled back")
            }
            _ => None,
        }
    }
}

crate::simple_display! {
    PreciseResourceStatus {
        Unknown => "unknown",
        Creating => "creating",
        ConfigComplete => "config complete",
        Created => "created",
        CreateFailed => "create failed",
        CreateInterrupted => "create interrupted",
        CreateRollingBack => "rolling back create",
        CreateRollbackFailed => "create rollback failed",
        CreateRollbackComplete => "create rolled back",
        Updating => "updating",
        UpdateConfigComplete => "update config complete",
        Updated => "updated",
        UpdateFailed => "update failed",
        UpdateInterrupted => "update interrupted",
        UpdateRollingBack => "rolling back update",
        UpdateRollbackFailed => "update rollback failed",
        UpdateRollbackConfigComplete => "update rollback config complete",
        UpdateRollbackComplete => "update rolled back",
        Destroying => "destroying",
        Destroyed => "destroyed",
        DestroyFailed => "destroy failed",
        DestroyInterrupted => "destroy interrupted",
        DestroyRollingBack => "rolling back destroy",
        DestroyRollbackFailed => "destroy rollback failed",
        DestroyRollbackConfigComplete => "destroy rollback config complete",
        DestroyRollbackComplete => "destroy rolled back",
    }
}
