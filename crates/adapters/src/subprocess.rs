// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded subprocess execution.

use std::process::Output;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::Instant;

/// Upper bound for one remote operation (ssh round trip included).
pub const REMOTE_COMMAND_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("failed to spawn {description}: {source}")]
    Spawn { description: String, source: std::io::Error },
    #[error("{description} timed out after {}s", timeout.as_secs())]
    TimedOut { description: String, timeout: Duration },
}

/// Run `cmd` to completion, collecting its output, or kill it after `timeout`.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true).stdin(std::process::Stdio::null());
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => {
            Err(SubprocessError::Spawn { description: description.to_string(), source })
        }
        Err(_) => {
            tracing::warn!(description, timeout_secs = timeout.as_secs(), "subprocess timed out");
            Err(SubprocessError::TimedOut { description: description.to_string(), timeout })
        }
    }
}

/// Milliseconds since `start` on the tokio clock, saturating at `u64::MAX`.
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
