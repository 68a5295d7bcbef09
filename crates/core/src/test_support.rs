// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers and proptest strategies.

use std::time::Duration;

use crate::job::JobSpec;
use crate::target::{Endpoint, Target};

/// A job spec for `root@h1` with loopback relay and sink.
pub fn job_spec(capture_type: &str, duration_secs: u64) -> JobSpec {
    JobSpec {
        capture_type: capture_type.to_string(),
        duration: Duration::from_secs(duration_secs),
        target: Target { host: "h1".to_string(), user: "root".to_string() },
        relay: "127.0.0.1".to_string(),
        processing: "127.0.0.1".to_string(),
        results_sink: Endpoint { host: "127.0.0.1".to_string(), port: 27017 },
    }
}

pub mod strategies {
    use crate::job::JobStatus;
    use proptest::prelude::*;

    pub fn arb_job_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Started),
            Just(JobStatus::CaptureRunning),
            Just(JobStatus::ProcessingRunning),
            Just(JobStatus::Complete),
            Just(JobStatus::Error),
        ]
    }
}
