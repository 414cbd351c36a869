// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId;
}

#[test]
fn define_id_hash_map_lookup() {
    let mut map = HashMap::new();
    map.insert(TestId::new("k"), 42);
    assert_eq!(map.get("k"), Some(&42));
}

#[test]
fn define_id_default_is_empty() {
    assert!(TestId::default().is_empty());
    assert!(!TestId::new("x").is_empty());
}

#[test]
fn instance_id_serde_is_transparent() {
    let id = InstanceId::new("inst-1");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"inst-1\"");

    let parsed: InstanceId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn instance_id_compares_with_str() {
    let id: InstanceId = "root".into();
    assert_eq!(id, "root");
    assert_eq!(id.as_str(), "root");
    assert_eq!(id.to_string(), "root");
}
