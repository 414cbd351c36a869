// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child blueprint update handler

use super::{claims_planned_root, locate, Tracker};
use dw_core::{ChildItem, ChildUpdate, ElementStatus};

pub(super) fn apply(tracker: &mut Tracker, update: &ChildUpdate) {
    let learned = tracker.paths.record_child(
        &update.child_instance_id,
        &update.child_name,
        &update.parent_instance_id,
    );

    let parent = &update.parent_instance_id;
    let name = &update.child_name;
    if claims_planned_root(&tracker.children, &tracker.paths, parent, name) {
        tracker.adopt_root(parent);
    }

    let resolved = tracker.paths.resolve(parent, name);
    if let Some(item) = locate(
        &mut tracker.children,
        &mut tracker.top_level,
        &resolved,
        &update.parent_instance_id,
        &update.child_name,
        |path| ChildItem::new(&update.child_name, path),
    ) {
        item.parent_instance_id = Some(update.parent_instance_id.clone());
        if !update.child_instance_id.is_empty() {
            item.child_instance_id = Some(update.child_instance_id.clone());
        }

        let mut status = update.status;
        if status.is_interrupted() {
            status = status.interrupted_for(item.action);
        }
        item.status = Some(status);
        item.failure_reasons = if status.is_failed() {
            update.failure_reasons.clone()
        } else {
            Vec::new()
        };
        item.group = update.group;
        item.last_update_timestamp = Some(update.update_timestamp);
        if let Some(durations) = &update.durations {
            item.durations = Some(durations.clone());
        }

        tracing::debug!(path = %item.path, status = %status, "child updated");
    }

    if learned {
        tracker.reanchor();
    }
}
