// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion durations reported by the engine, in milliseconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDurations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_complete_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attempt_durations: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceDurations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
}

/// Per-stage link durations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDurations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_a_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_b_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_resources: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
}
