// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for remote I/O

pub mod command;
pub mod remote;
pub mod ssh;
pub mod subprocess;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use command::{quote, Arg, RemoteCommand};
pub use remote::{RemoteError, RemoteExecutor, RemoteOutput};
pub use ssh::{SshConfig, SshExecutor};
pub use subprocess::{elapsed_ms, run_with_timeout, SubprocessError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeExecutor, RemoteCall};
