// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide orchestration settings.

use serde::Deserialize;
use tv_core::{CaptureCatalog, Endpoint};

/// Settings read once at process start.
///
/// Every field has a default, so an empty configuration file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix of every generated session name
    pub app_name: String,
    /// Trace-storage root on the processing target
    pub trace_root: String,
    /// Destroy a half-built session when a later capture step fails
    pub teardown_on_failure: bool,
    pub defaults: Defaults,
    pub processing: ProcessingSettings,
    pub capture_types: CaptureCatalog,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "tracevisor".to_string(),
            trace_root: "/root/lttng-traces".to_string(),
            teardown_on_failure: false,
            defaults: Defaults::default(),
            processing: ProcessingSettings::default(),
            capture_types: CaptureCatalog::builtin(),
        }
    }
}

/// Addresses used when a submission leaves them out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub relay: String,
    /// When unset, processing runs on the job's relay
    pub processing: Option<String>,
    pub results_sink: Endpoint,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            relay: "127.0.0.1".to_string(),
            processing: None,
            results_sink: Endpoint { host: "127.0.0.1".to_string(), port: 27017 },
        }
    }
}

/// How the processing operation is invoked on the processing target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// Program that runs the script; empty runs the script directly
    pub interpreter: String,
    pub scripts_root: String,
    pub sink_host_flag: String,
    pub sink_port_flag: String,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            scripts_root: "/usr/local/src/lttng-analyses".to_string(),
            sink_host_flag: "--mongo-host".to_string(),
            sink_port_flag: "--mongo-port".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
