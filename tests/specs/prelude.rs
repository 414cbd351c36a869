// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for running `dw` against fixture files.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tempfile::TempDir;

/// Root child `core` is planned with two resources; `bucket` sits at the root.
pub const CHANGES: &str = r#"{
  "new_resources": { "bucket": {} },
  "new_children": {
    "core": { "new_resources": { "vpc": {}, "subnet": {} } }
  }
}"#;

pub const EVENTS_DEPLOYED: &str = r#"{"type":"deployment:update","instance_id":"root","status":"deploying"}
{"type":"child:update","parent_instance_id":"root","child_instance_id":"c-1","child_name":"core","status":"deploying"}
{"type":"resource:update","instance_id":"root","resource_id":"r-1","resource_name":"bucket","status":"created"}
{"type":"resource:update","instance_id":"c-1","resource_id":"r-2","resource_name":"vpc","status":"created"}
{"type":"resource:update","instance_id":"c-1","resource_id":"r-3","resource_name":"subnet","status":"created"}
{"type":"child:update","parent_instance_id":"root","child_instance_id":"c-1","child_name":"core","status":"deployed"}
{"type":"deployment:finished","instance_id":"root","status":"deployed"}
"#;

pub const EVENTS_FAILED: &str = r#"{"type":"deployment:update","instance_id":"root","status":"deploying"}
{"type":"child:update","parent_instance_id":"root","child_instance_id":"c-1","child_name":"core","status":"deploying"}
{"type":"resource:update","instance_id":"root","resource_id":"r-1","resource_name":"bucket","status":"created"}
{"type":"resource:update","instance_id":"c-1","resource_id":"r-2","resource_name":"vpc","status":"create_failed","failure_reasons":["quota exceeded"]}
{"type":"resource:update","instance_id":"c-1","resource_id":"r-3","resource_name":"subnet","status":"creating"}
{"type":"deployment:finished","instance_id":"root","status":"deploy_failed","failure_reasons":["core failed"]}
"#;

pub const EVENTS_INTERRUPTED: &str = r#"{"type":"deployment:update","instance_id":"root","status":"deploying"}
{"type":"resource:update","instance_id":"root","resource_id":"r-1","resource_name":"bucket","status":"create_interrupted"}
{"type":"deployment:finished","instance_id":"root","status":"deploy_interrupted"}
"#;

/// Variables removed from every `dw` invocation so the host shell cannot leak in.
const INHERITED_ENV: [&str; 6] = [
    "DW_CONFIG",
    "DW_INSTANCE_ID",
    "DW_LOG",
    "DW_OUTPUT",
    "COLOR",
    "RUST_LOG",
];

/// Path of the `dw` binary, built once per test run.
fn dw_binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        let status = std::process::Command::new(env!("CARGO"))
            .args(["build", "--quiet", "--package", "dw", "--bin", "dw"])
            .status()
            .expect("failed to run cargo build");
        assert!(status.success(), "cargo build of dw failed");
        assert_cmd::cargo::cargo_bin("dw")
    })
}

/// A `dw` invocation under construction.
pub struct Cli {
    cmd: assert_cmd::Command,
}

/// `dw` with a clean environment, run from the crate root.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::new(dw_binary());
    for name in INHERITED_ENV {
        cmd.env_remove(name);
    }
    cmd.env("NO_COLOR", "1");
    Cli { cmd }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.cmd.env(name, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and expect exit code 0.
    pub fn passes(self) -> Run {
        self.fails_with(0)
    }

    /// Run and expect the given exit code.
    pub fn fails_with(mut self, code: i32) -> Run {
        let output = self.cmd.output().expect("failed to run dw");
        let run = Run {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

/// Captured output of a finished run.
pub struct Run {
    stdout: String,
    stderr: String,
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout has {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Temporary working directory holding fixture files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Project with `changes.json` and the given events in `events.jsonl`.
    pub fn with_events(events: &str) -> Self {
        let project = Self::empty();
        project.file("changes.json", CHANGES);
        project.file("events.jsonl", events);
        project
    }

    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("failed to write fixture");
    }

    /// `dw` run from inside the project directory.
    pub fn dw(&self) -> Cli {
        cli().current_dir(self.dir.path())
    }
}
