// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tokio::time::Instant;
use tv_adapters::{elapsed_ms, RemoteCommand, RemoteExecutor, RemoteOutput};
use tv_core::Target;

use crate::error::{Step, StepError};

/// Run one remote step, logging it with its elapsed time.
pub(crate) async fn run_step<E: RemoteExecutor>(
    executor: &E,
    target: &Target,
    step: Step,
    command: &RemoteCommand,
) -> Result<RemoteOutput, StepError> {
    tracing::info!(%step, %target, "executing {}", command);
    let start = Instant::now();
    let result = executor.run(target, command).await;
    let elapsed_ms = elapsed_ms(start);
    match result {
        Ok(output) => {
            tracing::info!(%step, elapsed_ms, "completed");
            Ok(output)
        }
        Err(e) => {
            tracing::error!(%step, error = %e, elapsed_ms, "step failed");
            Err(StepError::new(step, e))
        }
    }
}
