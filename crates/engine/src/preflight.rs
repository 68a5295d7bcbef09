// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Requirements a target must meet before a capture job is created.
//!
//! 1. the transport can reach it (`id`)
//! 2. a root session daemon is running (`pgrep -u root lttng-sessiond`)
//! 3. non-root users belong to the `tracing` group (`groups`)
//!
//! Checks run once, in order, and are never retried.

use tv_adapters::{RemoteCommand, RemoteError, RemoteExecutor};
use tv_core::Target;

use crate::error::PreflightError;

pub const TRACING_GROUP: &str = "tracing";

pub async fn check<E: RemoteExecutor>(executor: &E, target: &Target) -> Result<(), PreflightError> {
    let unreachable = |source| PreflightError::Unreachable { target: target.clone(), source };

    executor.run(target, &RemoteCommand::new("id")).await.map_err(unreachable)?;

    let pgrep = RemoteCommand::new("pgrep").args(["-u", "root", "lttng-sessiond"]);
    match executor.run(target, &pgrep).await {
        Ok(_) => {}
        // pgrep exits 1 when nothing matches
        Err(RemoteError::Failed { code: Some(1), .. }) => {
            return Err(PreflightError::NoSessionDaemon { host: target.host.clone() });
        }
        Err(e) => return Err(unreachable(e)),
    }

    if !target.is_root() {
        let groups = executor.run(target, &RemoteCommand::new("groups")).await.map_err(unreachable)?;
        if !groups.stdout.split_whitespace().any(|g| g == TRACING_GROUP) {
            return Err(PreflightError::NotInTracingGroup {
                user: target.user.clone(),
                host: target.host.clone(),
            });
        }
    }

    tracing::info!(%target, "preflight checks passed");
    Ok(())
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
