// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to flush logs before terminating.

use std::fmt;

/// Submission rejected or preflight failed
pub const EXIT_REJECTED: i32 = 1;
/// At least one job ended in `error`
pub const EXIT_JOB_FAILED: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(EXIT_REJECTED, message)
    }

    pub fn job_failed(failed: usize, total: usize) -> Self {
        Self::new(EXIT_JOB_FAILED, format!("{failed} of {total} job(s) failed"))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map_or(EXIT_REJECTED, |e| e.code)
}
