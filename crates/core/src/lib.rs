// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tv-core: job model and capture configuration for tracevisor

pub mod macros;

pub mod capture;
pub mod clock;
pub mod job;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use capture::{CaptureCatalog, CaptureType, ProcessingSpec};
pub use clock::{Clock, FakeClock, SystemClock};
pub use job::{session_name, Job, JobId, JobSnapshot, JobSpec, JobStatus, StatusChange};
pub use target::{Endpoint, Target, TargetError};
