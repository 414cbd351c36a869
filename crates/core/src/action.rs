// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a deployment intends to do with an element.

use serde::{Deserialize, Serialize};

/// Planned action for an element, assigned once from the change description
/// (or `NoChange`/`Inspect` when the element is only known from a snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    Create,
    Update,
    Delete,
    Recreate,
    NoChange,
    /// Viewing an existing deployment; nothing will be changed.
    Inspect,
}

impl ItemAction {
    /// Action inherited by snapshot-only elements beneath a parent with this action.
    pub fn inherited(parent: Option<ItemAction>) -> ItemAction {
        match parent {
            Some(ItemAction::Inspect) => ItemAction::Inspect,
            _ => ItemAction::NoChange,
        }
    }

    /// The deployment will act on the element.
    pub fn is_change(self) -> bool {
        matches!(
            self,
            ItemAction::Create | ItemAction::Update | ItemAction::Delete | ItemAction::Recreate
        )
    }
}

crate::simple_display! {
    ItemAction {
        Create => "create",
        Update => "update",
        Delete => "delete",
        Recreate => "recreate",
        NoChange => "no change",
        Inspect => "inspect",
    }
}
