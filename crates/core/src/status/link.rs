// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Link status codes.

use super::{ElementStatus, StatusCategory};
use crate::action::ItemAction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Creating,
    Created,
    CreateFailed,
    CreateInterrupted,
    CreateRollingBack,
    CreateRollbackFailed,
    CreateRollbackComplete,
    Updating,
    Updated,
    UpdateFailed,
    UpdateInterrupted,
    UpdateRollingBack,
    UpdateRollbackFailed,
    UpdateRollbackComplete,
    Destroying,
    Destroyed,
    DestroyFailed,
    DestroyInterrupted,
    DestroyRollingBack,
    DestroyRollbackFailed,
    DestroyRollbackComplete,
    /// Any status code not listed above.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ElementStatus for LinkStatus {
    fn category(self) -> StatusCategory {
        use LinkStatus as S;
        match self {
            S::Unknown => StatusCategory::Pending,
            S::Creating | S::Updating | S::Destroying => StatusCategory::InProgress,
            S::CreateRollingBack | S::UpdateRollingBack | S::DestroyRollingBack => {
                StatusCategory::RollingBack
            }
            S::Created
            | S::Updated
            | S::Destroyed
            | S::CreateRollbackComplete
            | S::UpdateRollbackComplete
            | S::DestroyRollbackComplete => StatusCategory::Succeeded,
            S::CreateFailed
            | S::UpdateFailed
            | S::DestroyFailed
            | S::CreateRollbackFailed
            | S::UpdateRollbackFailed
            | S::DestroyRollbackFailed => StatusCategory::Failed,
            S::CreateInterrupted | S::UpdateInterrupted | S::DestroyInterrupted => {
                StatusCategory::Interrupted
            }
        }
    }

    fn is_rollback_terminal(self) -> bool {
        use LinkStatus as S;
        matches!(
            self,
            S::CreateRollbackFailed
                | S::CreateRollbackComplete
                | S::UpdateRollbackFailed
                | S::UpdateRollbackComplete
                | S::DestroyRollbackFailed
                | S::DestroyRollbackComplete
        )
    }

    fn interrupted_for(self, action: Option<ItemAction>) -> Self {
        use LinkStatus as S;
        match action {
            Some(ItemAction::Create) => S::CreateInterrupted,
            Some(ItemAction::Update | ItemAction::Recreate) => S::UpdateInterrupted,
            Some(ItemAction::Delete) => S::DestroyInterrupted,
            _ => match self {
                S::Creating => S::CreateInterrupted,
                S::Updating => S::UpdateInterrupted,
                S::Destroying => S::DestroyInterrupted,
                other => other,
            },
        }
    }

    fn success_action(self) -> Option<&'static str> {
        use LinkStatus as S;
        match self {
            S::Created => Some("created"),
            S::Updated => Some("updated"),
            S::Destroyed => Some("destroyed"),
            S::CreateRollbackComplete | S::UpdateRollbackComplete | S::DestroyRollbackComplete => {
                Some("rolled back")
            }
            _ => None,
        }
    }
}

crate::simple_display! {
    LinkStatus {
        Unknown => "unknown",
        Creating => "creating",
        Created => "created",
        CreateFailed => "create failed",
        CreateInterrupted => "create interrupted",
        CreateRollingBack => "rolling back create",
        CreateRollbackFailed => "create rollback failed",
        CreateRollbackComplete => "create rolled back",
        Updating => "updating",
        Updated => "updated",
        UpdateFailed => "update failed",
        UpdateInterrupted => "update interrupted",
        UpdateRollingBack => "rolling back update",
        UpdateRollbackFailed => "update rollback failed",
        UpdateRollbackComplete => "update rolled back",
        Destroying => "destroying",
        Destroyed => "destroyed",
        DestroyFailed => "destroy failed",
        DestroyInterrupted => "destroy interrupted",
        DestroyRollingBack => "rolling back destroy",
        DestroyRollbackFailed => "destroy rollback failed",
        DestroyRollbackComplete => "destroy rolled back",
    }
}

/// Stage-level link status. A link is applied in three stages: updating
/// resource A, updating resource B, then updating intermediary resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreciseLinkStatus {
    UpdatingResourceA,
    ResourceAUpdated,
    ResourceAUpdateFailed,
    ResourceAUpdateInterrupted,
    ResourceAUpdateRollingBack,
    ResourceAUpdateRollbackFailed,
    ResourceAUpdateRollbackComplete,
    UpdatingResourceB,
    ResourceBUpdated,
    ResourceBUpdateFailed,
    ResourceBUpdateInterrupted,
    ResourceBUpdateRollingBack,
    ResourceBUpdateRollbackFailed,
    ResourceBUpdateRollbackComplete,
    UpdatingIntermediaryResources,
    IntermediaryResourcesUpdated,
    IntermediaryResourceUpdateFailed,
    IntermediaryResourceUpdateInterrupted,
    IntermediaryResourceUpdateRollingBack,
    IntermediaryResourceUpdateRollbackFailed,
    IntermediaryResourceUpdateRollbackComplete,
    /// Any status code not listed above.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ElementStatus for PreciseLinkStatus {
    fn category(self) -> StatusCategory {
        use PreciseLinkStatus as P;
        match self {
            P::Unknown => StatusCategory::Pending,
            // A finished A or B stage still has later stages to run.
            P::UpdatingResourceA
            | P::ResourceAUpdated
            | P::UpdatingResourceB
            | P::ResourceBUpdated
            | P::UpdatingIntermediaryResources => StatusCategory::InProgress,
            P::ResourceAUpdateRollingBack
            | P::ResourceBUpdateRollingBack
            | P::IntermediaryResourceUpdateRollingBack => StatusCategory::RollingBack,
            P::IntermediaryResourcesUpdated
            | P::ResourceAUpdateRollbackComplete
            | P::ResourceBUpdateRollbackComplete
            | P::IntermediaryResourceUpdateRollbackComplete => StatusCategory::Succeeded,
            P::ResourceAUpdateFailed
            | P::ResourceBUpdateFailed
            | P::IntermediaryResourceUpdateFailed
            | P::ResourceAUpdateRollbackFailed
            | P::ResourceBUpdateRollbackFailed
            | P::IntermediaryResourceUpdateRollbackFailed => StatusCategory::Failed,
            P::ResourceAUpdateInterrupted
            | P::ResourceBUpdateInterrupted
            | P::IntermediaryResourceUpdateInterrupted => StatusCategory::Interrupted,
        }
    }

    fn is_rollback_terminal(self) -> bool {
        use PreciseLinkStatus as P;
        matches!(
            self,
            P::ResourceAUpdateRollbackFailed
                | P::ResourceAUpdateRollbackComplete
                | P::ResourceBUpdateRollbackFailed
                | P::ResourceBUpdateRollbackComplete
                | P::IntermediaryResourceUpdateRollbackFailed
                | P::IntermediaryResourceUpdateRollbackComplete
        )
    }

    /// Stage statuses do not depend on the planned action: the interruption is
    /// attributed to the stage that was running (or due to run next).
    fn interrupted_for(self, _action: Option<ItemAction>) -> Self {
        use PreciseLinkStatus as P;
        match self {
            P::UpdatingResourceA => P::ResourceAUpdateInterrupted,
            P::ResourceAUpdated | P::UpdatingResourceB => P::ResourceBUpdateInterrupted,
            P::ResourceBUpdated | P::UpdatingIntermediaryResources => {
                P::IntermediaryResourceUpdateInterrupted
            }
            other => other,
        }
    }
}

crate::simple_display! {
    PreciseLinkStatus {
        Unknown => "unknown",
        UpdatingResourceA => "updating resource A",
        ResourceAUpdated => "resource A updated",
        ResourceAUpdateFailed => "resource A update failed",
        ResourceAUpdateInterrupted => "resource A update interrupted",
        ResourceAUpdateRollingBack => "rolling back resource A",
        ResourceAUpdateRollbackFailed => "resource A rollback failed",
        ResourceAUpdateRollbackComplete => "resource A rolled back",
        UpdatingResourceB => "updating resource B",
        ResourceBUpdated => "resource B updated",
        ResourceBUpdateFailed => "resource B update failed",
        ResourceBUpdateInterrupted => "resource B update interrupted",
        ResourceBUpdateRollingBack => "rolling back resource B",
        ResourceBUpdateRollbackFailed => "resource B rollback failed",
        ResourceBUpdateRollbackComplete => "resource B rolled back",
        UpdatingIntermediaryResources => "updating intermediary resources",
        IntermediaryResourcesUpdated => "intermediary resources updated",
        IntermediaryResourceUpdateFailed => "intermediary resource update failed",
        IntermediaryResourceUpdateInterrupted => "intermediary resource update interrupted",
        IntermediaryResourceUpdateRollingBack => "rolling back intermediary resources",
        IntermediaryResourceUpdateRollbackFailed => "intermediary resource rollback failed",
        IntermediaryResourceUpdateRollbackComplete => "intermediary resources rolled back",
    }
}
