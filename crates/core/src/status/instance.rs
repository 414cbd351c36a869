// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blueprint instance status codes, used for child blueprints and for the
//! deployment as a whole.

use super::{ElementStatus, StatusCategory};
use crate::action::ItemAction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    Preparing,
    NotDeployed,
    Deploying,
    Deployed,
    DeployFailed,
    DeployInterrupted,
    DeployRollingBack,
    DeployRollbackFailed,
    DeployRollbackComplete,
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

impl InstanceStatus {
    /// Whether a deployment reaching this status stops all not-yet-attempted
    /// work: a failure, a rollback in progress, or a finished rollback.
    pub fn halts_deployment(self) -> bool {
        self.is_failed() || self.is_rollback_in_progress() || self.is_rollback_terminal()
    }
}

impl ElementStatus for InstanceStatus {
    fn category(self) -> StatusCategory {
        use InstanceStatus as S;
        match self {
            S::Unknown | S::NotDeployed => StatusCategory::Pending,
            S::Preparing | S::Deploying | S::Updating | S::Destroying => {
                StatusCategory::InProgress
            }
            S::DeployRollingBack | S::UpdateRollingBack | S::DestroyRollingBack => {
                StatusCategory::RollingBack
            }
            S::Deployed
            | S::Updated
            | S::Destroyed
            | S::DeployRollbackComplete
            | S::UpdateRollbackComplete
            | S::DestroyRollbackComplete => StatusCategory::Succeeded,
            S::DeployFailed
            | S::UpdateFailed
            | S::DestroyFailed
            | S::DeployRollbackFailed
            | S::UpdateRollbackFailed
            | S::DestroyRollbackFailed => StatusCategory::Failed,
            S::DeployInterrupted | S::UpdateInterrupted | S::DestroyInterrupted => {
                StatusCategory::Interrupted
            }
        }
    }

    fn is_rollback_terminal(self) -> bool {
        use InstanceStatus as S;
        matches!(
            self,
            S::DeployRollbackFailed
                | S::DeployRollbackComplete
                | S::UpdateRollbackFailed
                | S::UpdateRollbackComplete
                | S::DestroyRollbackFailed
                | S::DestroyRollbackComplete
        )
    }

    fn interrupted_for(self, action: Option<ItemAction>) -> Self {
        use InstanceStatus as S;
        match action {
            Some(ItemAction::Create) => S::DeployInterrupted,
            Some(ItemAction::Update | ItemAction::Recreate) => S::UpdateInterrupted,
            Some(ItemAction::Delete) => S::DestroyInterrupted,
            _ => match self {
                S::Preparing | S::Deploying => S::DeployInterrupted,
                S::Updating => S::UpdateInterrupted,
                S::Destroying => S::DestroyInterrupted,
                other => other,
            },
        }
    }

    fn success_action(self) -> Option<&'static str> {
        use InstanceStatus as S;
        match self {
            S::Deployed => Some("deployed"),
            S::Updated => Some("updated"),
            S::Destroyed => Some("destroyed"),
            S::DeployRollbackComplete | S::UpdateRollbackComplete | S::DestroyRollbackComplete => {
                Some("rolled back")
            }
            _ => None,
        }
    }
}

crate::simple_display! {
    InstanceStatus {
        Unknown => "unknown",
        Preparing => "preparing",
        NotDeployed => "not deployed",
        Deploying => "deploying",
        Deployed => "deployed",
        DeployFailed => "deploy failed",
        DeployInterrupted => "deploy interrupted",
        DeployRollingBack => "rolling back deployment",
        DeployRollbackFailed => "deployment rollback failed",
        DeployRollbackComplete => "deployment rolled back",
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
