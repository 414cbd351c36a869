// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw engine status codes and their classification.
//!
//! Every status enum maps each code to exactly one [`StatusCategory`]. Codes
//! the engine sends that this crate does not know deserialize as `Unknown`
//! and classify as [`StatusCategory::Pending`].

mod instance;
mod link;
mod resource;

pub use instance::InstanceStatus;
pub use link::{LinkStatus, PreciseLinkStatus};
pub use resource::{PreciseResourceStatus, ResourceStatus};

use crate::action::ItemAction;
use serde::{Deserialize, Serialize};

/// Outcome classification shared by all element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Not started yet (or an unrecognised status).
    Pending,
    InProgress,
    RollingBack,
    Succeeded,
    Failed,
    /// Processing stopped mid-operation; the true end state is unknown.
    Interrupted,
}

crate::simple_display! {
    StatusCategory {
        Pending => "pending",
        InProgress => "in progress",
        RollingBack => "rolling back",
        Succeeded => "succeeded",
        Failed => "failed",
        Interrupted => "interrupted",
    }
}

/// Classification behaviour shared by every raw status enum.
pub trait ElementStatus: Copy + PartialEq + std::fmt::Debug {
    fn category(self) -> StatusCategory;

    /// Rollback finished, successfully or not.
    fn is_rollback_terminal(self) -> bool;

    /// The interrupted status to record for an element with the given planned
    /// action. Falls back to the operation implied by `self` when the action is
    /// unknown or does not imply one.
    fn interrupted_for(self, action: Option<ItemAction>) -> Self;

    /// Past-tense description of a successful terminal status.
    fn success_action(self) -> Option<&'static str> {
        None
    }

    fn is_in_progress(self) -> bool {
        self.category() == StatusCategory::InProgress
    }

    fn is_rollback_in_progress(self) -> bool {
        self.category() == StatusCategory::RollingBack
    }

    fn is_interrupted(self) -> bool {
        self.category() == StatusCategory::Interrupted
    }

    fn is_failed(self) -> bool {
        self.category() == StatusCategory::Failed
    }
}

/// Classify an optional status; an element with no status yet is pending.
pub fn classify<S: ElementStatus>(status: Option<S>) -> StatusCategory {
    status.map_or(StatusCategory::Pending, ElementStatus::category)
}

#[cfg(test)]
#[path = "../status_tests.rs"]
mod tests;
