// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Link update handler

use super::{claims_planned_root, locate, Tracker};
use dw_core::{ElementStatus, LinkItem, LinkUpdate, PreciseLinkStatus};

pub(super) fn apply(tracker: &mut Tracker, update: &LinkUpdate) {
    let instance = &update.instance_id;
    let name = &update.link_name;
    if claims_planned_root(&tracker.links, &tracker.paths, instance, name) {
        tracker.adopt_root(instance);
    }
    let resolved = tracker.paths.resolve(instance, name);
    let Some(item) = locate(
        &mut tracker.links,
        &mut tracker.top_level,
        &resolved,
        &update.instance_id,
        &update.link_name,
        |path| LinkItem::new(&update.link_name, path),
    ) else {
        return;
    };

    item.instance_id = Some(update.instance_id.clone());
    if !update.link_id.is_empty() {
        item.link_id = Some(update.link_id.clone());
    }

    let mut status = update.status;
    let mut precise = update.precise_status;
    if status.is_interrupted() {
        status = status.interrupted_for(item.action);
        precise = precise.interrupted_for(item.action);
    }
    item.status = Some(status);
    item.precise_status = (precise != PreciseLinkStatus::Unknown).then_some(precise);
    item.failure_reasons = if status.is_failed() {
        update.failure_reasons.clone()
    } else {
        Vec::new()
    };
    item.current_stage_attempt = update.current_stage_attempt;
    item.can_retry_current_stage = update.can_retry_current_stage;
    item.last_update_timestamp = Some(update.update_timestamp);
    if let Some(durations) = &update.durations {
        item.durations = Some(durations.clone());
    }

    tracing::debug!(path = %item.path, status = %status, "link updated");
}
