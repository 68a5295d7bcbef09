// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tracevisor run` - submit capture jobs and follow them to completion

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tv_adapters::RemoteExecutor;
use tv_core::{Clock, JobId, JobStatus};
use tv_engine::{CaptureRequest, Orchestrator};

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_job_detail, format_job_table, format_or_json, handle_list, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Capture type (see `tracevisor types`)
    #[arg(long = "type", short = 't')]
    pub capture_type: String,

    /// Capture duration (e.g. "30", "45s", "2m", "1h30m")
    #[arg(long, short = 'd', value_parser = parse_duration_secs)]
    pub duration: u64,

    /// Target host; one job per host (repeatable)
    #[arg(long = "host", short = 'H', required = true)]
    pub hosts: Vec<String>,

    /// Remote user on the target hosts
    #[arg(long, short = 'u', default_value = "root")]
    pub user: String,

    /// Relay receiving the trace stream
    #[arg(long)]
    pub relay: Option<String>,

    /// Host running the processing step (defaults to the relay)
    #[arg(long)]
    pub processing: Option<String>,

    /// Results sink host
    #[arg(long)]
    pub sink_host: Option<String>,

    /// Results sink port
    #[arg(long)]
    pub sink_port: Option<u16>,

    /// Status poll interval in milliseconds
    #[arg(long, default_value = "500")]
    pub poll_ms: u64,

    /// Print each job's status history instead of the summary table
    #[arg(long)]
    pub details: bool,
}

/// Parse a human-readable duration into seconds (e.g. "5m", "30s", "1h30m").
///
/// A bare number is seconds.
pub fn parse_duration_secs(s: &str) -> Result<u64, String> {
    let mut total_secs: u64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        let n: u64 = current_num.parse().map_err(|_| format!("invalid duration: {s}"))?;
        current_num.clear();
        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(format!("unknown duration unit '{c}' in: {s}")),
        };
        total_secs = n
            .checked_mul(unit)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or_else(|| format!("duration too long: {s}"))?;
    }
    if !current_num.is_empty() {
        let n: u64 = current_num.parse().map_err(|_| format!("invalid duration: {s}"))?;
        total_secs = total_secs.checked_add(n).ok_or_else(|| format!("duration too long: {s}"))?;
    }
    if total_secs == 0 {
        return Err(format!("duration must be > 0: {s}"));
    }
    Ok(total_secs)
}

impl RunArgs {
    fn request(&self, host: &str) -> CaptureRequest {
        let mut req = CaptureRequest::new(&self.capture_type, self.duration, host, &self.user);
        req.relay = self.relay.clone();
        req.processing = self.processing.clone();
        req.sink_host = self.sink_host.clone();
        req.sink_port = self.sink_port;
        req
    }
}

pub async fn handle<E: RemoteExecutor, C: Clock>(
    orch: &Orchestrator<E, C>,
    args: RunArgs,
    format: OutputFormat,
) -> Result<()> {
    let text = format == OutputFormat::Text;

    let mut submitted: Vec<JobId> = Vec::new();
    let mut rejected = 0;
    for host in &args.hosts {
        match orch.submit(args.request(host)).await {
            Ok(id) => {
                if text {
                    println!("submitted job {id} on {host}");
                }
                submitted.push(id);
            }
            Err(e) => {
                eprintln!("{host}: {e}");
                rejected += 1;
            }
        }
    }
    if submitted.is_empty() {
        return Err(ExitError::rejected(format!("{rejected} submission(s) rejected")).into());
    }

    follow(orch, &submitted, Duration::from_millis(args.poll_ms.max(1)), text).await;

    // Listing reclaims the finished jobs
    let finished: Vec<_> =
        orch.list_jobs().await.into_iter().filter(|j| submitted.contains(&j.id)).collect();
    if text {
        println!();
    }
    if args.details {
        format_or_json(format, &finished, || {
            let mut out = std::io::stdout();
            for job in &finished {
                format_job_detail(&mut out, job);
            }
        })?;
    } else {
        handle_list(format, &finished, "No jobs", |items, out| format_job_table(out, items))?;
    }

    let failed = finished.iter().filter(|j| j.status == JobStatus::Error).count();
    if failed > 0 {
        return Err(ExitError::job_failed(failed, finished.len()).into());
    }
    if rejected > 0 {
        return Err(ExitError::rejected(format!("{rejected} submission(s) rejected")).into());
    }
    Ok(())
}

/// Poll until every job is terminal, printing status changes.
async fn follow<E: RemoteExecutor, C: Clock>(
    orch: &Orchestrator<E, C>,
    ids: &[JobId],
    poll: Duration,
    text: bool,
) {
    let mut seen: HashMap<JobId, JobStatus> = HashMap::new();
    let mut interval = tokio::time::interval(poll);
    loop {
        interval.tick().await;
        let mut live = 0;
        for &id in ids {
            let Some(job) = orch.job(id) else { continue };
            if seen.insert(id, job.status) != Some(job.status) && text {
                println!("job {} {}: {}", id, job.host, color::status(job.status));
            }
            if !job.status.is_terminal() {
                live += 1;
            }
        }
        if live == 0 {
            break;
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
