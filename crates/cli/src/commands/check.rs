// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tracevisor check` - run the preflight checks without starting a capture


use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tv_adapters::RemoteExecutor;
use tv_core::{Clock, Target};
use tv_engine::Orchestrator;

use crate::exit_error::ExitError;
use crate::output::{handle_list, OutputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Target host (repeat for several hosts)
    #[arg(long = "host", short = 'H', required = true)]
    pub hosts: Vec<String>,

    /// Remote user
    #[arg(long, short = 'u', default_value = "root")]
    pub user: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    host: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn handle<E: RemoteExecutor, C: Clock>(
    orch: &Orchestrator<E, C>,
    args: CheckArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut results = Vec::with_capacity(args.hosts.len());
    for host in args.hosts {
        let outcome = match Target::new(&host, &args.user) {
            Ok(target) => orch.preflight(&target).await.map_err(|e| e.to_string()),
            Err(e) => Err(format!("invalid target: {e}")),
        };
        results.push(CheckResult { host, ok: outcome.is_ok(), error: outcome.err() });
    }

    handle_list(format, &results, "No hosts checked", |items, out| {
        for r in items {
            let _ = match &r.error {
                None => writeln!(out, "{}: ok", r.host),
                Some(e) => writeln!(out, "{}: {}", r.host, e),
            };
        }
    })?;

    let failed = results.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        return Err(ExitError::rejected(format!("{failed} host(s) failed preflight")).into());
    }
    Ok(())
}
