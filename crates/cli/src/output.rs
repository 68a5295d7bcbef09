// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tv_core::JobSnapshot;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a list as text table or JSON. Handles empty check + format branch.
pub fn handle_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_text: impl FnOnce(&[T], &mut dyn Write),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", empty_msg);
            } else {
                render_text(items, &mut std::io::stdout());
            }
        }
    }
    Ok(())
}

/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

const JOB_COLUMNS: [&str; 5] = ["ID", "STATUS", "TYPE", "HOST", "SESSION"];

/// Job table with an indented error line under failed jobs.
pub fn format_job_table(out: &mut dyn Write, jobs: &[JobSnapshot]) {
    let rows: Vec<[String; 5]> = jobs
        .iter()
        .map(|j| {
            [
                j.id.to_string(),
                j.status.to_string(),
                j.capture_type.clone(),
                j.host.clone(),
                j.session_name.clone(),
            ]
        })
        .collect();

    let mut widths = JOB_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> =
        JOB_COLUMNS.iter().zip(widths).map(|(h, w)| format!("{h:<w$}")).collect();
    let _ = writeln!(out, "{}", color::header(header.join("  ").trim_end()));

    for (job, row) in jobs.iter().zip(&rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = format!("{cell:<w$}");
                // pad before coloring so escape codes don't skew the columns
                if i == 1 {
                    padded.replacen(cell.as_str(), &color::status(job.status), 1)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        if let Some(error) = &job.error {
            let _ = writeln!(out, "    {} {}", color::context("error:"), error);
        }
    }
}

/// Multi-line detail view of one job.
pub fn format_job_detail(out: &mut dyn Write, job: &JobSnapshot) {
    let _ = writeln!(out, "{} {}", color::header("Job:"), job.id);
    let _ = writeln!(out, "  {} {}", color::context("Status:"), color::status(job.status));
    let _ = writeln!(out, "  {} {}", color::context("Type:"), job.capture_type);
    let _ = writeln!(out, "  {} {}", color::context("Host:"), job.host);
    let _ = writeln!(out, "  {} {}", color::context("Session:"), job.session_name);
    if let Some(error) = &job.error {
        let _ = writeln!(out, "  {} {}", color::context("Error:"), error);
    }
    if !job.history.is_empty() {
        let _ = writeln!(out, "  {}", color::header("History:"));
        for change in &job.history {
            let _ = writeln!(
                out,
                "    {}  {}",
                change.at.format("%Y-%m-%d %H:%M:%S"),
                color::status(change.status)
            );
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
