// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `data` as pretty JSON, or as text via `text_fn`.
pub fn render<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(text_fn()),
    }
}

/// Print `data` as pretty JSON, or as text via `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    let rendered = render(format, data, text_fn)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Indented list of items under a `Title (count)` header; empty lists render nothing.
pub fn section<T>(out: &mut String, title: &str, items: &[T], line: impl Fn(&T) -> String) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} ({})", crate::color::header(title), items.len());
    for item in items {
        out.push_str("  ");
        out.push_str(&line(item));
        out.push('\n');
    }
}
