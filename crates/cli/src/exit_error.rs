// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

/// At least one element (or the deployment itself) failed.
pub const EXIT_FAILED: i32 = 1;
/// Elements were interrupted but none failed.
pub const EXIT_INTERRUPTED: i32 = 2;
/// An input file or setting could not be read.
pub const EXIT_INPUT: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error that escaped a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        return exit.code;
    }
    if err.downcast_ref::<crate::input::InputError>().is_some() {
        return EXIT_INPUT;
    }
    EXIT_FAILED
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
