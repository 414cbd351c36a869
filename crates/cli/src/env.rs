// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::Overrides;
use crate::input::InputError;
use crate::output::OutputFormat;

/// Config file looked up in the working directory when `DW_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "dw.toml";

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolve config path: DW_CONFIG > ./dw.toml (when present)
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty("DW_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

/// Settings supplied through `DW_LOG`, `DW_INSTANCE_ID`, and `DW_OUTPUT`.
pub fn overrides() -> Result<Overrides, InputError> {
    let output = non_empty("DW_OUTPUT")
        .map(|value| {
            OutputFormat::from_str(&value, true).map_err(|_| InputError::Env {
                name: "DW_OUTPUT",
                value,
            })
        })
        .transpose()?;
    Ok(Overrides {
        instance_id: non_empty("DW_INSTANCE_ID"),
        log: non_empty("DW_LOG"),
        output,
    })
}

/// `NO_COLOR=1` disables color output.
pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// `COLOR=1` forces color output.
pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
