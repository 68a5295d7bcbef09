// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-capture processing on the processing target.

use tv_adapters::{RemoteCommand, RemoteExecutor};
use tv_core::{CaptureType, JobSpec};

use crate::error::{ConfigError, Step, StepError};
use crate::settings::ProcessingSettings;
use crate::step::run_step;

/// Everything the processing operation needs about one finished capture
#[derive(Debug, Clone, Copy)]
pub struct ProcessingInput<'a> {
    pub spec: &'a JobSpec,
    pub capture: &'a CaptureType,
    pub hostname: &'a str,
    pub session: &'a str,
}

pub struct ProcessingDispatcher<'a, E> {
    executor: &'a E,
    settings: &'a ProcessingSettings,
    trace_root: &'a str,
}

/// Captured-data path pattern: `{root}/{hostname}/{session}*/kernel`.
///
/// The relay suffixes the session directory with its own timestamp; the
/// session name is unique, so the wildcard matches only this capture.
pub fn trace_path(trace_root: &str, hostname: &str, session: &str) -> String {
    format!("{}/{}/{}*/kernel", trace_root.trim_end_matches('/'), hostname, session)
}

impl<'a, E: RemoteExecutor> ProcessingDispatcher<'a, E> {
    pub fn new(executor: &'a E, settings: &'a ProcessingSettings, trace_root: &'a str) -> Self {
        Self { executor, settings, trace_root }
    }

    /// Build the processing command for a capture.
    pub fn command(&self, input: &ProcessingInput<'_>) -> Result<RemoteCommand, ConfigError> {
        let spec = input.spec;
        let processing = input.capture.processing.as_ref();
        let script = processing
            .and_then(|p| p.script.as_deref())
            .ok_or_else(|| ConfigError::MissingProcessingScript(spec.capture_type.clone()))?;
        let args = processing
            .and_then(|p| p.args.as_deref())
            .ok_or_else(|| ConfigError::MissingProcessingArgs(spec.capture_type.clone()))?;

        let script_path = format!("{}/{}", self.settings.scripts_root.trim_end_matches('/'), script);
        let cmd = if self.settings.interpreter.is_empty() {
            RemoteCommand::new(script_path)
        } else {
            RemoteCommand::new(&self.settings.interpreter).arg(script_path)
        };
        Ok(cmd
            .args(args)
            .arg(&self.settings.sink_host_flag)
            .arg(&spec.results_sink.host)
            .arg(&self.settings.sink_port_flag)
            .arg(spec.results_sink.port.to_string())
            .pattern(trace_path(self.trace_root, input.hostname, input.session)))
    }

    /// Run the processing operation against the job's processing target,
    /// logged in as the capture user.
    pub async fn dispatch(&self, input: &ProcessingInput<'_>) -> Result<(), StepError> {
        let command = self.command(input).map_err(|e| StepError::new(Step::Processing, e))?;
        let target = input
            .spec
            .target
            .with_host(&input.spec.processing)
            .map_err(|e| StepError::new(Step::Processing, e))?;
        run_step(self.executor, &target, Step::Processing, &command).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
