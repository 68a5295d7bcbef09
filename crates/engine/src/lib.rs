// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tv-engine: capture orchestration, one driver task per job

pub mod dispatcher;
pub mod driver;
pub mod error;
pub mod orchestrator;
pub mod preflight;
pub mod registry;
pub mod sequencer;
pub mod settings;
mod step;

pub use dispatcher::{trace_path, ProcessingDispatcher, ProcessingInput};
pub use error::{ConfigError, PreflightError, Step, StepError, SubmitError};
pub use orchestrator::{CaptureRequest, Orchestrator};
pub use registry::JobRegistry;
pub use sequencer::{Capture, CaptureSequencer};
pub use settings::{Defaults, ProcessingSettings, Settings};
