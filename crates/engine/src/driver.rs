// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job driver: capture, then processing, advancing the job's status at
//! each phase boundary. Runs as its own task, one per job.

use std::sync::Arc;

use tracing::Instrument;
use tv_adapters::RemoteExecutor;
use tv_core::{Clock, Job, JobStatus};

use crate::dispatcher::{ProcessingDispatcher, ProcessingInput};
use crate::error::ConfigError;
use crate::sequencer::CaptureSequencer;
use crate::settings::Settings;

pub const DRIVER_EXITED: &str = "driver exited unexpectedly";

/// Fails the job if the driver goes away before reaching a terminal status.
struct ExitGuard<'a, C: Clock> {
    job: &'a Job,
    clock: &'a C,
}

impl<C: Clock> Drop for ExitGuard<'_, C> {
    fn drop(&mut self) {
        if self.job.fail(DRIVER_EXITED, self.clock) {
            tracing::error!(job_id = %self.job.id, "{}", DRIVER_EXITED);
        }
    }
}

/// Drive one job to `complete` or `error`.
pub async fn drive<E: RemoteExecutor, C: Clock>(
    job: Arc<Job>,
    executor: E,
    clock: C,
    settings: Arc<Settings>,
) {
    let span = tracing::info_span!("job", job_id = %job.id, session = %job.session_name);
    async {
        let _guard = ExitGuard { job: &job, clock: &clock };
        match run(&job, &executor, &clock, &settings).await {
            Ok(()) => {
                job.advance(JobStatus::Complete, &clock);
                tracing::info!("job complete");
            }
            Err(reason) => {
                tracing::error!(error = %reason, "job failed");
                job.fail(reason, &clock);
            }
        }
    }
    .instrument(span)
    .await
}

async fn run<E: RemoteExecutor, C: Clock>(
    job: &Job,
    executor: &E,
    clock: &C,
    settings: &Settings,
) -> Result<(), String> {
    let capture = settings
        .capture_types
        .get(&job.spec.capture_type)
        .ok_or_else(|| ConfigError::UnknownCaptureType(job.spec.capture_type.clone()).to_string())?;

    let captured = CaptureSequencer::new(executor, clock)
        .teardown_on_failure(settings.teardown_on_failure)
        .run(job, capture)
        .await
        .map_err(|e| e.to_string())?;
    job.advance(JobStatus::ProcessingRunning, clock);

    let input = ProcessingInput {
        spec: &job.spec,
        capture,
        hostname: &captured.hostname,
        session: &job.session_name,
    };
    ProcessingDispatcher::new(executor, &settings.processing, &settings.trace_root)
        .dispatch(&input)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
