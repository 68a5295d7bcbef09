// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scriptable in-memory executor for tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tv_core::Target;

use crate::command::RemoteCommand;
use crate::remote::{RemoteError, RemoteExecutor, RemoteOutput};

/// Recorded remote call
#[derive(Debug, Clone)]
pub struct RemoteCall {
    pub target: Target,
    pub command: RemoteCommand,
}

impl RemoteCall {
    /// `user@host program args...`, the text rules are matched against.
    pub fn line(&self) -> String {
        format!("{} {}", self.target, self.command)
    }
}

#[derive(Debug, Clone)]
struct Rule {
    needle: String,
    reply: Result<String, String>,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<RemoteCall>,
    rules: Vec<Rule>,
}

/// Fake executor that records every call.
///
/// Calls whose [`RemoteCall::line`] contains a registered needle get that
/// rule's reply (first match wins). Unmatched calls succeed with empty
/// output, except `hostname`, which answers with the target's host.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer matching calls with `stdout`.
    pub fn respond(&self, needle: impl Into<String>, stdout: impl Into<String>) -> &Self {
        self.inner.lock().rules.push(Rule { needle: needle.into(), reply: Ok(stdout.into()) });
        self
    }

    /// Fail matching calls with exit status 1 and `stderr`.
    pub fn fail(&self, needle: impl Into<String>, stderr: impl Into<String>) -> &Self {
        self.inner.lock().rules.push(Rule { needle: needle.into(), reply: Err(stderr.into()) });
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.inner.lock().calls.clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().calls.iter().map(RemoteCall::line).collect()
    }

    /// Number of recorded calls whose line contains `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.inner.lock().calls.iter().filter(|c| c.line().contains(needle)).count()
    }
}

#[async_trait]
impl RemoteExecutor for FakeExecutor {
    async fn run(
        &self,
        target: &Target,
        command: &RemoteCommand,
    ) -> Result<RemoteOutput, RemoteError> {
        let call = RemoteCall { target: target.clone(), command: command.clone() };
        let line = call.line();
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        let reply = inner.rules.iter().find(|r| line.contains(&r.needle)).map(|r| r.reply.clone());
        drop(inner);

        match reply {
            Some(Ok(stdout)) => Ok(RemoteOutput { stdout, stderr: String::new() }),
            Some(Err(stderr)) => Err(RemoteError::Failed { code: Some(1), stderr }),
            None if command.program() == "hostname" => {
                Ok(RemoteOutput { stdout: format!("{}\n", target.host), stderr: String::new() })
            }
            None => Ok(RemoteOutput::default()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
