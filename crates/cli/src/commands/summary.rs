// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dw summary`: replay a deployment and report per-element outcomes.

use anyhow::Result;
use clap::Args;
use dw_core::{classify, InstanceStatus, StatusCategory};
use dw_tracker::{DeploymentState, DeploymentSummary};
use serde::Serialize;
use std::fmt::Write;

use super::{build_tracker, SourceArgs};
use crate::color;
use crate::config::Settings;
use crate::exit_error::{ExitError, EXIT_FAILED, EXIT_INTERRUPTED};
use crate::output::{format_or_json, section};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    status: Option<InstanceStatus>,
    finished: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    failure_reasons: &'a [String],
    #[serde(flatten)]
    summary: &'a DeploymentSummary,
}

pub fn handle(args: SummaryArgs, settings: &Settings) -> Result<()> {
    let tracker = build_tracker(&args.sources, settings.instance_id.clone(), false)?;
    let summary = tracker.summary();
    let deployment = tracker.deployment();

    let report = SummaryReport {
        status: deployment.status,
        finished: deployment.finished,
        failure_reasons: &deployment.failure_reasons,
        summary: &summary,
    };
    format_or_json(settings.output, &report, || {
        render_text(deployment, &summary)
    })?;

    outcome(deployment, &summary)
}

/// Map the deployment result to the process exit status. A deployment that
/// failed or rolled back counts as failed even when every element succeeded.
pub(crate) fn outcome(deployment: &DeploymentState, summary: &DeploymentSummary) -> Result<()> {
    let deployment_failed = deployment
        .status
        .is_some_and(InstanceStatus::halts_deployment);
    if summary.has_failures() || deployment_failed {
        let message = match summary.failed.len() {
            0 => "deployment failed".to_string(),
            1 => "1 element failed".to_string(),
            n => format!("{n} elements failed"),
        };
        return Err(ExitError::new(EXIT_FAILED, message).into());
    }
    let deployment_interrupted = classify(deployment.status) == StatusCategory::Interrupted;
    if summary.has_interruptions() || deployment_interrupted {
        let message = match summary.interrupted.len() {
            0 => "deployment interrupted".to_string(),
            1 => "1 element interrupted".to_string(),
            n => format!("{n} elements interrupted"),
        };
        return Err(ExitError::new(EXIT_INTERRUPTED, message).into());
    }
    Ok(())
}

pub(crate) fn render_text(deployment: &DeploymentState, summary: &DeploymentSummary) -> String {
    let mut out = String::new();

    let status = match deployment.status {
        Some(status) => status.to_string(),
        None => color::muted("not started"),
    };
    let progress = if deployment.finished {
        ""
    } else {
        " (in progress)"
    };
    let _ = writeln!(out, "Deployment: {status}{progress}");
    for reason in &deployment.failure_reasons {
        let _ = writeln!(out, "  {}", color::failure(reason));
    }

    section(&mut out, "Successful", &summary.successful, |e| {
        format!("{}  {}", e.path, color::success(&e.action))
    });

    if !summary.failed.is_empty() {
        let failed = &summary.failed;
        let _ = writeln!(out, "{} ({})", color::header("Failed"), failed.len());
        for element in failed {
            let _ = writeln!(out, "  {}", color::failure(&element.path));
            for reason in &element.failure_reasons {
                let _ = writeln!(out, "    - {reason}");
            }
        }
    }

    section(&mut out, "Interrupted", &summary.interrupted, |e| {
        color::warning(&e.path)
    });
    section(&mut out, "Skipped", &summary.skipped, |e| {
        color::muted(&e.path)
    });

    let untouched = summary.successful.is_empty()
        && summary.failed.is_empty()
        && summary.interrupted.is_empty()
        && summary.skipped.is_empty();
    if untouched {
        out.push_str("No elements reached a final state\n");
    }
    out
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
