// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote execution contract.

use async_trait::async_trait;
use thiserror::Error;
use tv_core::Target;

use crate::command::RemoteCommand;
use crate::subprocess::SubprocessError;

/// Errors from running one remote operation
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error(transparent)]
    Transport(#[from] SubprocessError),
    #[error("{}", failed_message(.code, .stderr))]
    Failed { code: Option<i32>, stderr: String },
}

fn failed_message(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{status}: {stderr}")
    }
}

/// Captured output of a successful remote operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs one discrete operation on a remote target.
///
/// Implementations report success or failure and never retry.
#[async_trait]
pub trait RemoteExecutor: Clone + Send + Sync + 'static {
    async fn run(
        &self,
        target: &Target,
        command: &RemoteCommand,
    ) -> Result<RemoteOutput, RemoteError>;
}
