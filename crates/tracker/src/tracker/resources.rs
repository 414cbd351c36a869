// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource update handler

use super::{claims_planned_root, locate, Tracker};
use dw_core::{ElementStatus, PreciseResourceStatus, ResourceItem, ResourceUpdate};

pub(super) fn apply(tracker: &mut Tracker, update: &ResourceUpdate) {
    let instance = &update.instance_id;
    let name = &update.resource_name;
    if claims_planned_root(&tracker.resources, &tracker.paths, instance, name) {
        tracker.adopt_root(instance);
    }
    let resolved = tracker.paths.resolve(instance, name);
    let Some(item) = locate(
        &mut tracker.resources,
        &mut tracker.top_level,
        &resolved,
        &update.instance_id,
        &update.resource_name,
        |path| ResourceItem::new(&update.resource_name, path),
    ) else {
        return;
    };

    item.instance_id = Some(update.instance_id.clone());
    if !update.resource_id.is_empty() {
        item.resource_id = Some(update.resource_id.clone());
    }

    let mut status = update.status;
    let mut precise = update.precise_status;
    if status.is_interrupted() {
        status = status.interrupted_for(item.action);
        precise = precise.interrupted_for(item.action);
    }
    item.status = Some(status);
    item.precise_status = (precise != PreciseResourceStatus::Unknown).then_some(precise);
    item.failure_reasons = if status.is_failed() {
        update.failure_reasons.clone()
    } else {
        Vec::new()
    };
    item.group = update.group;
    item.attempt = update.attempt;
    item.can_retry = update.can_retry;
    item.last_update_timestamp = Some(update.update_timestamp);
    if let Some(durations) = &update.durations {
        item.durations = Some(durations.clone());
    }

    tracing::debug!(
        path = %item.path,
        status = %status,
        provisional = item.provisional,
        "resource updated"
    );
}
