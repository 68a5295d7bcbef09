// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy of the orchestration core.

use std::fmt;

use thiserror::Error;
use tv_adapters::RemoteError;
use tv_core::{Target, TargetError};

/// Configuration problems, found at submission or at dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown capture type: {0}")]
    UnknownCaptureType(String),
    #[error("capture type `{0}` has no processing script")]
    MissingProcessingScript(String),
    #[error("capture type `{0}` has no processing arguments")]
    MissingProcessingArgs(String),
}

/// Requirements checked on the target before a job is created
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("cannot establish an ssh connection to {target}: {source}")]
    Unreachable { target: Target, source: RemoteError },
    #[error("root lttng-sessiond not running on {host}")]
    NoSessionDaemon { host: String },
    #[error("user {user} is not in the tracing group on {host}")]
    NotInTracingGroup { user: String, host: String },
}

/// Why a submission was rejected; no job exists when this is returned
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] TargetError),
    #[error(transparent)]
    Preflight(#[from] PreflightError),
}

/// One step of a job's remote sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveHostname,
    CreateSession,
    EnableKernelEvents,
    EnableSyscalls,
    EnableUserspaceEvents,
    StartSession,
    StopSession,
    DestroySession,
    Processing,
}

tv_core::simple_display! {
    Step {
        ResolveHostname => "resolve hostname",
        CreateSession => "create session",
        EnableKernelEvents => "enable kernel events",
        EnableSyscalls => "enable syscalls",
        EnableUserspaceEvents => "enable userspace events",
        StartSession => "start session",
        StopSession => "stop session",
        DestroySession => "destroy session",
        Processing => "processing",
    }
}

impl Step {
    /// Whether the capture session is known to exist when this step fails.
    pub fn leaves_session(self) -> bool {
        matches!(
            self,
            Step::EnableKernelEvents
                | Step::EnableSyscalls
                | Step::EnableUserspaceEvents
                | Step::StartSession
                | Step::StopSession
        )
    }
}

/// A failed step; terminal for its job
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{step}: {reason}")]
pub struct StepError {
    pub step: Step,
    pub reason: String,
}

impl StepError {
    pub fn new(step: Step, reason: impl fmt::Display) -> Self {
        Self { step, reason: reason.to_string() }
    }
}
