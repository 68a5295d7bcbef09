// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier and state machine.
//!
//! ```text
//! started ──▶ capture_running ──▶ processing_running ──▶ complete
//!    │               │                    │
//!    └───────────────┴────────────────────┴──────────────▶ error
//! ```
//!
//! Only the job's own driver writes the status; everything else reads a copy
//! taken under the job's mutex.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::target::{Endpoint, Target};

/// Process-unique job number, assigned from 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl JobId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a job is in its capture → processing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Started,
    CaptureRunning,
    ProcessingRunning,
    Complete,
    Error,
}

crate::simple_display! {
    JobStatus {
        Started => "started",
        CaptureRunning => "capture_running",
        ProcessingRunning => "processing_running",
        Complete => "complete",
        Error => "error",
    }
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Complete | JobStatus::Error)
    }

    /// The next status on the success path, if any.
    pub fn successor(self) -> Option<JobStatus> {
        match self {
            JobStatus::Started => Some(JobStatus::CaptureRunning),
            JobStatus::CaptureRunning => Some(JobStatus::ProcessingRunning),
            JobStatus::ProcessingRunning => Some(JobStatus::Complete),
            JobStatus::Complete | JobStatus::Error => None,
        }
    }

    /// Success-path moves go one step forward; any live status may fail.
    pub fn can_advance_to(self, next: JobStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == JobStatus::Error || self.successor() == Some(next)
    }
}

/// One observed status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: JobStatus,
    pub at: DateTime<Utc>,
}

/// Derive the capture session name: `{app}-{type}-{YYYYmmdd-HHMMSS}-{id}`.
///
/// The trailing job id keeps names unique across concurrently running jobs.
pub fn session_name(app: &str, capture_type: &str, at: DateTime<Utc>, id: JobId) -> String {
    format!("{}-{}-{}-{}", app, capture_type, at.format("%Y%m%d-%H%M%S"), id)
}

/// Fixed inputs of a job, resolved from the submission and process defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub capture_type: String,
    pub duration: Duration,
    pub target: Target,
    pub relay: String,
    pub processing: String,
    pub results_sink: Endpoint,
}

/// Mutable part of a job, guarded by the job's own mutex
#[derive(Debug)]
struct JobState {
    status: JobStatus,
    error: Option<String>,
    history: Vec<StatusChange>,
}

/// One orchestration run (capture + processing).
#[derive(Debug)]
pub struct Job {
    pub id: JobId,
    pub session_name: String,
    pub spec: JobSpec,
    pub created_at: DateTime<Utc>,
    state: Mutex<JobState>,
}

impl Job {
    pub fn new(id: JobId, app: &str, spec: JobSpec, clock: &impl Clock) -> Self {
        let created_at = clock.now();
        let session_name = session_name(app, &spec.capture_type, created_at, id);
        Self {
            id,
            session_name,
            spec,
            created_at,
            state: Mutex::new(JobState {
                status: JobStatus::Started,
                error: None,
                history: vec![StatusChange { status: JobStatus::Started, at: created_at }],
            }),
        }
    }

    pub fn status(&self) -> JobStatus {
        self.state.lock().status
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn history(&self) -> Vec<StatusChange> {
        self.state.lock().history.clone()
    }

    /// Move to `next` on the success path. Returns false if the move is not
    /// allowed from the current status.
    pub fn advance(&self, next: JobStatus, clock: &impl Clock) -> bool {
        let mut state = self.state.lock();
        if next == JobStatus::Error || !state.status.can_advance_to(next) {
            return false;
        }
        state.status = next;
        state.history.push(StatusChange { status: next, at: clock.now() });
        true
    }

    /// Fail the job with a reason. No-op once terminal.
    pub fn fail(&self, reason: impl Into<String>, clock: &impl Clock) -> bool {
        let mut state = self.state.lock();
        if state.status.is_terminal() {
            return false;
        }
        state.status = JobStatus::Error;
        state.error = Some(reason.into());
        state.history.push(StatusChange { status: JobStatus::Error, at: clock.now() });
        true
    }

    /// Consistent copy of the job for readers outside the driver.
    pub fn snapshot(&self) -> JobSnapshot {
        let state = self.state.lock();
        JobSnapshot {
            id: self.id,
            status: state.status,
            error: state.error.clone(),
            session_name: self.session_name.clone(),
            capture_type: self.spec.capture_type.clone(),
            host: self.spec.target.host.clone(),
            created_at: self.created_at,
            history: state.history.clone(),
        }
    }
}

/// Point-in-time view of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: JobId,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub session_name: String,
    pub capture_type: String,
    pub host: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<StatusChange>,
}

impl JobSnapshot {
    pub fn statuses(&self) -> Vec<JobStatus> {
        self.history.iter().map(|c| c.status).collect()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
