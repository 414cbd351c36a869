// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dw-tracker: Incremental hierarchical state for a streaming deployment
//!
//! A [`Tracker`] is seeded from a change description (or a snapshot alone),
//! then fed engine events in arrival order. It keeps one entry per element
//! keyed by full hierarchical path, expands child blueprints on demand, and
//! produces a [`DeploymentSummary`] when the deployment ends.

mod collect;
mod expand;
mod levels;
mod paths;
mod seed;
mod store;
mod tracker;

pub use collect::{
    display_path, kind_segment, DeploymentSummary, FailedElement, HaltedElement,
    SuccessfulElement, DISPLAY_PATH_SEPARATOR,
};
pub use paths::{PathResolver, ResolvedPath};
pub use store::Registry;
pub use tracker::{DeploymentState, Tracker, TrackerConfig};
