// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod summary;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dw_core::{BlueprintChanges, InstanceId};
use dw_tracker::{Tracker, TrackerConfig};

use crate::exit_error::{ExitError, EXIT_INPUT};
use crate::input;

/// Where the deployment description and event stream are read from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Change description (JSON)
    #[arg(long, value_name = "FILE")]
    pub changes: Option<PathBuf>,

    /// Last-known instance state (JSON)
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Engine events, one JSON object per line; `-` reads stdin
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,
}

/// Seed a tracker from `sources` and replay the event stream into it.
///
/// With `inspect`, the tree is seeded from the snapshot alone.
pub(crate) fn build_tracker(
    sources: &SourceArgs,
    instance_id: Option<InstanceId>,
    inspect: bool,
) -> Result<Tracker> {
    let snapshot = sources
        .snapshot
        .as_deref()
        .map(input::load_snapshot)
        .transpose()?;
    let mut tracker = Tracker::new(TrackerConfig { instance_id });

    if inspect {
        let Some(snapshot) = snapshot.as_ref() else {
            return Err(ExitError::new(EXIT_INPUT, "--inspect requires --snapshot").into());
        };
        tracker.seed_inspect(snapshot);
    } else {
        let changes = match sources.changes.as_deref() {
            Some(path) => input::load_changes(path)?,
            None => BlueprintChanges::default(),
        };
        tracker.seed(&changes, snapshot.as_ref());
    }

    if let Some(path) = sources.events.as_deref() {
        let events = input::load_events(path)?;
        tracing::info!(count = events.len(), path = %path.display(), "replaying events");
        for event in &events {
            tracker.apply_event(event);
        }
    }
    Ok(tracker)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
