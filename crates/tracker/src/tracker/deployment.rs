// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment-level status handling and halt propagation

use super::Tracker;
use crate::store::Registry;
use dw_core::{Event, ItemAction, TrackedItem};

pub(super) fn apply(tracker: &mut Tracker, event: &Event) {
    match event {
        Event::DeploymentUpdate(update) => {
            tracker.adopt_root(&update.instance_id);
            tracker.deployment.status = Some(update.status);
            tracker.deployment.last_update_timestamp = Some(update.update_timestamp);
            if update.status.halts_deployment() && !tracker.deployment.finished {
                propagate_halt(tracker);
            }
        }

        Event::DeploymentFinished(finished) => {
            tracker.adopt_root(&finished.instance_id);
            tracker.deployment.status = Some(finished.status);
            tracker.deployment.failure_reasons = finished.failure_reasons.clone();
            tracker.deployment.finish_timestamp = Some(finished.finish_timestamp);
            if let Some(durations) = &finished.durations {
                tracker.deployment.durations = Some(durations.clone());
            }
            if finished.status.halts_deployment() && !tracker.deployment.finished {
                propagate_halt(tracker);
            }
            tracker.deployment.finished = true;
            tracing::info!(status = %finished.status, "deployment finished");
        }

        Event::PreRollbackState(state) => {
            tracker.adopt_root(&state.state.instance_id);
            tracker.deployment.pre_rollback_state = Some(state.state.clone());
        }

        _ => {}
    }
}

/// Mark not-yet-started elements skipped and in-flight elements interrupted.
/// Elements the plan leaves unchanged are never skipped.
fn propagate_halt(tracker: &mut Tracker) {
    let mut skipped = 0;
    let mut interrupted = 0;
    halt_registry(&mut tracker.resources, &mut skipped, &mut interrupted);
    halt_registry(&mut tracker.children, &mut skipped, &mut interrupted);
    halt_registry(&mut tracker.links, &mut skipped, &mut interrupted);
    tracing::info!(
        status = ?tracker.deployment.status,
        skipped,
        interrupted,
        "deployment halted"
    );
}

fn halt_registry<T: TrackedItem>(
    registry: &mut Registry<T>,
    skipped: &mut usize,
    interrupted: &mut usize,
) {
    for item in registry.values_mut() {
        if item.is_pending() {
            let planned = item.action().is_none_or(ItemAction::is_change);
            if planned && !item.is_skipped() {
                item.mark_skipped();
                *skipped += 1;
            }
        } else if item.interrupt() {
            *interrupted += 1;
        }
    }
}
