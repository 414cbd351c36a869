// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading change descriptions, snapshots, and event streams from disk.
//!
//! Change descriptions and snapshots are single JSON documents. Events are
//! JSON lines, one event per line; blank lines are ignored. A path of `-`
//! reads events from stdin.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use dw_core::{BlueprintChanges, Event, InstanceState};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid event on line {line} of {}: {source}", path.display())]
    Event {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {name}: {value:?}")]
    Env { name: &'static str, value: String },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_changes(path: &Path) -> Result<BlueprintChanges, InputError> {
    read_json(path)
}

pub fn load_snapshot(path: &Path) -> Result<InstanceState, InputError> {
    read_json(path)
}

/// Load a JSON-lines event stream from a file, or stdin for `-`.
pub fn load_events(path: &Path) -> Result<Vec<Event>, InputError> {
    if path == Path::new("-") {
        return parse_events(path, std::io::stdin().lock());
    }
    let file = std::fs::File::open(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(path, file)
}

/// Parse JSON-lines events. `path` is only used in error messages.
pub fn parse_events(path: &Path, reader: impl Read) -> Result<Vec<Event>, InputError> {
    let mut events = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|source| InputError::Event {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
