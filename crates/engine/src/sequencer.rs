// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capture sequence: the remote steps from session creation to teardown.
//!
//! ```text
//! hostname -s
//! lttng create <session> -U net://<relay>
//! lttng enable-event -s <session> -k <events>        (kernel events)
//! lttng enable-event -s <session> -k --syscall -a    (syscalls)
//! lttng enable-event -s <session> -u <events>        (user-space events)
//! lttng start <session>                              → capture_running
//! <wait duration>
//! lttng stop <session>
//! lttng destroy <session>
//! ```
//!
//! The first failing step ends the sequence.

use tv_adapters::{RemoteCommand, RemoteExecutor};
use tv_core::{CaptureType, Clock, Job, JobStatus, Target};

use crate::error::{Step, StepError};
use crate::step::run_step;

/// Result of a finished capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Short hostname reported by the target
    pub hostname: String,
}

pub struct CaptureSequencer<'a, E, C> {
    executor: &'a E,
    clock: &'a C,
    teardown_on_failure: bool,
}

fn lttng(subcommand: &str) -> RemoteCommand {
    RemoteCommand::new("lttng").arg(subcommand)
}

fn enable_event(session: &str) -> RemoteCommand {
    lttng("enable-event").args(["-s", session])
}

impl<'a, E: RemoteExecutor, C: Clock> CaptureSequencer<'a, E, C> {
    pub fn new(executor: &'a E, clock: &'a C) -> Self {
        Self { executor, clock, teardown_on_failure: false }
    }

    /// Destroy the session (best effort) when a step fails after creating it.
    pub fn teardown_on_failure(mut self, enabled: bool) -> Self {
        self.teardown_on_failure = enabled;
        self
    }

    /// Drive `job` through the capture. Moves it to `capture_running` once
    /// the session starts; leaves status changes on failure to the caller.
    pub async fn run(&self, job: &Job, capture: &CaptureType) -> Result<Capture, StepError> {
        let target = &job.spec.target;
        let output = run_step(
            self.executor,
            target,
            Step::ResolveHostname,
            &RemoteCommand::new("hostname").arg("-s"),
        )
        .await?;
        let hostname = output.stdout.trim().to_string();
        if hostname.is_empty() {
            return Err(StepError::new(Step::ResolveHostname, "empty hostname"));
        }

        if let Err(e) = self.record(job, capture).await {
            if self.teardown_on_failure && e.step.leaves_session() {
                self.teardown(target, &job.session_name).await;
            }
            return Err(e);
        }
        Ok(Capture { hostname })
    }

    async fn record(&self, job: &Job, capture: &CaptureType) -> Result<(), StepError> {
        let target = &job.spec.target;
        let session = job.session_name.as_str();

        let create = lttng("create").arg(session).arg("-U").arg(format!("net://{}", job.spec.relay));
        run_step(self.executor, target, Step::CreateSession, &create).await?;

        if !capture.kernel_events.is_empty() {
            let cmd = enable_event(session).arg("-k").arg(capture.kernel_events.join(","));
            run_step(self.executor, target, Step::EnableKernelEvents, &cmd).await?;
        }
        if capture.syscalls {
            let cmd = enable_event(session).args(["-k", "--syscall", "-a"]);
            run_step(self.executor, target, Step::EnableSyscalls, &cmd).await?;
        }
        if !capture.userspace_events.is_empty() {
            let cmd = enable_event(session).arg("-u").arg(capture.userspace_events.join(","));
            run_step(self.executor, target, Step::EnableUserspaceEvents, &cmd).await?;
        }

        run_step(self.executor, target, Step::StartSession, &lttng("start").arg(session)).await?;
        job.advance(JobStatus::CaptureRunning, self.clock);

        tracing::info!(duration_secs = job.spec.duration.as_secs(), "capture running");
        tokio::time::sleep(job.spec.duration).await;

        run_step(self.executor, target, Step::StopSession, &lttng("stop").arg(session)).await?;
        run_step(self.executor, target, Step::DestroySession, &lttng("destroy").arg(session))
            .await?;
        Ok(())
    }

    async fn teardown(&self, target: &Target, session: &str) {
        tracing::warn!(session, "destroying partially built session");
        if let Err(e) = self.executor.run(target, &lttng("destroy").arg(session)).await {
            tracing::warn!(session, error = %e, "teardown failed");
        }
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
