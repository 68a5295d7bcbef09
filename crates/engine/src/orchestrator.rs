// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry points for callers: submit a job, list jobs, inspect one job.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tv_adapters::RemoteExecutor;
use tv_core::{Clock, Endpoint, Job, JobId, JobSnapshot, JobSpec, Target};

use crate::driver::drive;
use crate::error::{ConfigError, PreflightError, SubmitError};
use crate::preflight;
use crate::registry::JobRegistry;
use crate::settings::Settings;

/// A job submission. Omitted addresses fall back to the process defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub capture_type: String,
    pub duration_secs: u64,
    pub host: String,
    pub user: String,
    pub relay: Option<String>,
    pub processing: Option<String>,
    pub sink_host: Option<String>,
    pub sink_port: Option<u16>,
}

impl CaptureRequest {
    pub fn new(
        capture_type: impl Into<String>,
        duration_secs: u64,
        host: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            capture_type: capture_type.into(),
            duration_secs,
            host: host.into(),
            user: user.into(),
            relay: None,
            processing: None,
            sink_host: None,
            sink_port: None,
        }
    }

    tv_core::setters! {
        option {
            relay: String,
            processing: String,
            sink_host: String,
            sink_port: u16,
        }
    }
}

pub struct Orchestrator<E, C> {
    settings: Arc<Settings>,
    executor: E,
    clock: C,
    registry: Arc<JobRegistry>,
}

impl<E: RemoteExecutor, C: Clock> Orchestrator<E, C> {
    pub fn new(settings: Settings, executor: E, clock: C) -> Self {
        Self {
            settings: Arc::new(settings),
            executor,
            clock,
            registry: Arc::new(JobRegistry::new()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Configured capture type names, in declaration order.
    pub fn capture_types(&self) -> Vec<String> {
        self.settings.capture_types.names().map(str::to_string).collect()
    }

    /// Check a target without creating a job.
    pub async fn preflight(&self, target: &Target) -> Result<(), PreflightError> {
        preflight::check(&self.executor, target).await
    }

    /// Resolve a request against the configured catalog and defaults.
    pub fn resolve(&self, req: &CaptureRequest) -> Result<JobSpec, SubmitError> {
        if self.settings.capture_types.get(&req.capture_type).is_none() {
            return Err(ConfigError::UnknownCaptureType(req.capture_type.clone()).into());
        }
        let target = Target::new(&req.host, &req.user)?;

        let defaults = &self.settings.defaults;
        let relay = req.relay.clone().unwrap_or_else(|| defaults.relay.clone());
        let processing = req
            .processing
            .clone()
            .or_else(|| defaults.processing.clone())
            .unwrap_or_else(|| relay.clone());
        let results_sink = Endpoint::new(
            req.sink_host.clone().unwrap_or_else(|| defaults.results_sink.host.clone()),
            req.sink_port.unwrap_or(defaults.results_sink.port),
        )?;

        Ok(JobSpec {
            capture_type: req.capture_type.clone(),
            duration: Duration::from_secs(req.duration_secs),
            target,
            relay,
            processing,
            results_sink,
        })
    }

    /// SubmitJob: validate, run preflight, then register the job and start
    /// its driver. Returns as soon as the job is registered.
    pub async fn submit(&self, req: CaptureRequest) -> Result<JobId, SubmitError> {
        let spec = self.resolve(&req)?;
        preflight::check(&self.executor, &spec.target).await?;

        let executor = self.executor.clone();
        let clock = self.clock.clone();
        let settings = Arc::clone(&self.settings);
        let id = self.registry.submit(
            |id| Job::new(id, &self.settings.app_name, spec, &self.clock),
            |job| drive(job, executor, clock, settings),
        );
        tracing::info!(
            job_id = %id,
            capture_type = %req.capture_type,
            host = %req.host,
            "job submitted"
        );
        Ok(id)
    }

    /// ListJobs: every registered job, then reclaim the terminal ones.
    ///
    /// Only jobs already terminal in the returned listing are reclaimed, so
    /// each terminal job appears in exactly one listing.
    pub async fn list_jobs(&self) -> Vec<JobSnapshot> {
        let jobs = self.registry.list();
        let listed: HashSet<JobId> =
            jobs.iter().filter(|j| j.status.is_terminal()).map(|j| j.id).collect();
        self.registry.reap_matching(|id| listed.contains(&id)).await;
        jobs
    }

    /// Snapshot of one job without reclaiming anything.
    pub fn job(&self, id: JobId) -> Option<JobSnapshot> {
        self.registry.get(id)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
