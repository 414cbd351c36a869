// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event methods: name and log summary

use super::Event;

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::ResourceUpdate(_) => "resource:update",
            Event::ChildUpdate(_) => "child:update",
            Event::LinkUpdate(_) => "link:update",
            Event::DeploymentUpdate(_) => "deployment:update",
            Event::DeploymentFinished(_) => "deployment:finished",
            Event::PreRollbackState(_) => "deployment:pre_rollback_state",
        }
    }

    /// One-line summary for structured logs.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::ResourceUpdate(e) => format!(
                "{t} instance={} name={} status={} attempt={}",
                e.instance_id, e.resource_name, e.status, e.attempt
            ),
            Event::ChildUpdate(e) => format!(
                "{t} parent={} instance={} name={} status={}",
                e.parent_instance_id, e.child_instance_id, e.child_name, e.status
            ),
            Event::LinkUpdate(e) => format!(
                "{t} instance={} name={} status={} stage_attempt={}",
                e.instance_id, e.link_name, e.status, e.current_stage_attempt
            ),
            Event::DeploymentUpdate(e) => format!("{t} status={}", e.status),
            Event::DeploymentFinished(e) => {
                let reasons = e.failure_reasons.len();
                format!("{t} status={} reasons={reasons}", e.status)
            }
            Event::PreRollbackState(e) => format!("{t} instance={}", e.state.instance_id),
        }
    }
}
