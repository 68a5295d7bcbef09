// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capture-type catalog: which events a capture enables and what runs after it.
//!
//! Loaded once at process start. Every field is optional at load time; a type
//! that lacks its processing script or arguments fails when the job reaches
//! dispatch, not when the catalog is read.
//!
//! ```toml
//! [capture_types.io]
//! kernel_events = ["sched_switch", "block_rq_complete"]
//! syscalls = true
//!
//! [capture_types.io.processing]
//! script = "fd-info.py"
//! args = ["--quiet", "--mongo"]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Event categories and follow-up processing for one capture type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureType {
    /// Kernel tracepoints enabled on the session
    pub kernel_events: Vec<String>,
    /// Enable every system call
    pub syscalls: bool,
    /// User-space tracepoints enabled on the session
    pub userspace_events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<ProcessingSpec>,
}

/// The processing operation run once the capture is torn down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSpec {
    pub script: Option<String>,
    pub args: Option<Vec<String>>,
}

impl CaptureType {
    /// Script and fixed arguments, if both are configured.
    pub fn processing_op(&self) -> Option<(&str, &[String])> {
        let spec = self.processing.as_ref()?;
        Some((spec.script.as_deref()?, spec.args.as_deref()?))
    }
}

/// Capture types keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureCatalog(IndexMap<String, CaptureType>);

const CPU_EVENTS: &[&str] = &[
    "sched_switch",
    "sched_process_fork",
    "sched_process_exec",
    "lttng_statedump_process_state",
];

const IO_EVENTS: &[&str] = &[
    "sched_switch",
    "block_rq_complete",
    "block_rq_issue",
    "block_bio_remap",
    "block_bio_backmerge",
    "netif_receive_skb",
    "net_dev_xmit",
    "sched_process_fork",
    "sched_process_exec",
    "lttng_statedump_process_state",
    "lttng_statedump_file_descriptor",
    "lttng_statedump_block_device",
];

fn fd_info() -> ProcessingSpec {
    ProcessingSpec {
        script: Some("fd-info.py".to_string()),
        args: Some(vec!["--quiet".to_string(), "--mongo".to_string()]),
    }
}

impl CaptureCatalog {
    /// The `cpu` and `io` types shipped when no catalog is configured.
    pub fn builtin() -> Self {
        let to_vec = |events: &[&str]| events.iter().map(|e| e.to_string()).collect();
        let mut types = IndexMap::new();
        types.insert(
            "cpu".to_string(),
            CaptureType {
                kernel_events: to_vec(CPU_EVENTS),
                processing: Some(fd_info()),
                ..Default::default()
            },
        );
        types.insert(
            "io".to_string(),
            CaptureType {
                kernel_events: to_vec(IO_EVENTS),
                syscalls: true,
                processing: Some(fd_info()),
                ..Default::default()
            },
        );
        Self(types)
    }

    pub fn get(&self, name: &str) -> Option<&CaptureType> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, CaptureType)> for CaptureCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CaptureType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
