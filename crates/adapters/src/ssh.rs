// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote execution over the system `ssh` client.
//!
//! Runs non-interactively (`BatchMode`), so a host that would prompt for a
//! password or passphrase fails fast instead of hanging the job.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tokio::time::Instant;
use tv_core::Target;

use crate::command::RemoteCommand;
use crate::remote::{RemoteError, RemoteExecutor, RemoteOutput};
use crate::subprocess::{elapsed_ms, run_with_timeout, REMOTE_COMMAND_TIMEOUT};

/// `[ssh]` configuration table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    /// ssh client binary
    pub binary: String,
    /// Private key passed with `-i`
    pub identity: Option<PathBuf>,
    pub connect_timeout_secs: u64,
    /// Bound on one remote operation, connection included
    pub command_timeout_secs: u64,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            binary: "ssh".to_string(),
            identity: None,
            connect_timeout_secs: 10,
            command_timeout_secs: REMOTE_COMMAND_TIMEOUT.as_secs(),
        }
    }
}

impl SshConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SshExecutor {
    config: Arc<SshConfig>,
}

impl SshExecutor {
    pub fn new(config: SshConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Full argument vector passed to the ssh binary (without the binary itself).
    pub fn ssh_args(&self, target: &Target, command: &RemoteCommand) -> Vec<String> {
        let mut args = vec![
            "-oBatchMode=yes".to_string(),
            "-oStrictHostKeyChecking=no".to_string(),
            format!("-oConnectTimeout={}", self.config.connect_timeout_secs),
        ];
        if let Some(identity) = &self.config.identity {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.extend([
            "-l".to_string(),
            target.user.clone(),
            "--".to_string(),
            target.host.clone(),
            command.to_shell(),
        ]);
        args
    }
}

#[async_trait]
impl RemoteExecutor for SshExecutor {
    async fn run(
        &self,
        target: &Target,
        command: &RemoteCommand,
    ) -> Result<RemoteOutput, RemoteError> {
        tracing::info!(%target, %command, "running remote command");

        let mut cmd = Command::new(&self.config.binary);
        cmd.args(self.ssh_args(target, command));
        let description = format!("ssh {target}");
        let start = Instant::now();
        let output = run_with_timeout(cmd, self.config.command_timeout(), &description).await?;
        let elapsed_ms = elapsed_ms(start);

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            tracing::warn!(
                %target,
                %command,
                code = ?output.status.code(),
                stderr = %stderr.trim(),
                elapsed_ms,
                "remote command failed"
            );
            return Err(RemoteError::Failed { code: output.status.code(), stderr });
        }
        tracing::info!(%target, elapsed_ms, "remote command completed");
        Ok(RemoteOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "ssh_tests.rs"]
mod tests;
