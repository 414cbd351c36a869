// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dw tree`: print the element hierarchy, expanding every child blueprint.

use anyhow::Result;
use clap::Args;
use dw_core::{ItemAction, ItemKey, ItemKind, StatusCategory};
use dw_tracker::Tracker;
use serde::Serialize;
use std::fmt::Write;

use super::{build_tracker, SourceArgs};
use crate::color;
use crate::config::Settings;
use crate::output::format_or_json;

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// View an existing deployment from `--snapshot` alone
    #[arg(long)]
    pub inspect: bool,
}

/// One element and everything beneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TreeNode {
    kind: ItemKind,
    name: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ItemAction>,
    status: String,
    category: StatusCategory,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    skipped: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

pub fn handle(args: TreeArgs, settings: &Settings) -> Result<()> {
    let mut tracker = build_tracker(&args.sources, settings.instance_id.clone(), args.inspect)?;
    let nodes = build_nodes(&mut tracker);
    format_or_json(settings.output, &nodes, || render_text(&nodes))
}

/// Expand the whole tree from the top-level elements down.
pub(crate) fn build_nodes(tracker: &mut Tracker) -> Vec<TreeNode> {
    let roots = tracker.top_level_keys().to_vec();
    roots
        .iter()
        .filter_map(|key| build_node(tracker, key))
        .collect()
}

fn build_node(tracker: &mut Tracker, key: &ItemKey) -> Option<TreeNode> {
    let item = tracker.get(key)?;
    let mut node = TreeNode {
        kind: item.kind(),
        name: item.name().to_string(),
        path: item.path().to_string(),
        action: item.action(),
        status: item.status_label(),
        category: item.category(),
        skipped: item.is_skipped(),
        children: Vec::new(),
    };
    if node.kind == ItemKind::Child {
        let children = tracker.expand(key);
        node.children = children
            .iter()
            .filter_map(|child| build_node(tracker, child))
            .collect();
    }
    Some(node)
}

pub(crate) fn render_text(nodes: &[TreeNode]) -> String {
    if nodes.is_empty() {
        return "No elements\n".to_string();
    }
    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node, 0);
    }
    out
}

fn render_node(out: &mut String, node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let status = match node.category {
        StatusCategory::Succeeded => color::success(&node.status),
        StatusCategory::Failed => color::failure(&node.status),
        StatusCategory::Interrupted | StatusCategory::RollingBack => color::warning(&node.status),
        StatusCategory::Pending | StatusCategory::InProgress => color::context(&node.status),
    };
    let action = node.action.map(|a| format!(" [{a}]")).unwrap_or_default();
    let skipped = if node.skipped {
        color::muted(" (skipped)")
    } else {
        String::new()
    };
    let (kind, name) = (node.kind, &node.name);
    let _ = writeln!(out, "{indent}{kind} {name}  {status}{action}{skipped}");
    for child in &node.children {
        render_node(out, child, depth + 1);
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
