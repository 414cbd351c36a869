// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dw.toml` configuration and settings resolution.
//!
//! Each setting resolves as: command-line flag > environment > config file >
//! built-in default.

use std::path::Path;

use dw_core::InstanceId;
use serde::Deserialize;

use crate::input::InputError;
use crate::output::OutputFormat;

/// Default tracing filter when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The deployment's own instance ID.
    pub instance_id: Option<String>,
    /// Tracing filter directive, e.g. `"dw_tracker=debug"`.
    pub log: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Config {
    pub fn parse(path: &Path, content: &str) -> Result<Self, InputError> {
        toml::from_str(content).map_err(|source| InputError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, or return the defaults when there is no config file.
    pub fn load(path: Option<&Path>) -> Result<Self, InputError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }
}

/// One layer of optional settings (flags or environment).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub instance_id: Option<String>,
    pub log: Option<String>,
    pub output: Option<OutputFormat>,
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub instance_id: Option<InstanceId>,
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Settings {
    pub fn resolve(flags: Overrides, env: Overrides, file: Config) -> Self {
        let instance_id = flags
            .instance_id
            .or(env.instance_id)
            .or(file.instance_id)
            .filter(|id| !id.is_empty())
            .map(InstanceId::new);
        let log_filter = flags
            .log
            .or(env.log)
            .or(file.log)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let output = flags
            .output
            .or(env.output)
            .or(file.output)
            .unwrap_or_default();
        Self {
            instance_id,
            log_filter,
            output,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
