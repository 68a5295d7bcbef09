// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tracevisor types` - list configured capture types

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tv_adapters::RemoteExecutor;
use tv_core::{CaptureType, Clock};
use tv_engine::Orchestrator;

use crate::color;
use crate::output::{handle_list, OutputFormat};

#[derive(Debug, Serialize)]
struct TypeEntry<'a> {
    name: String,
    #[serde(flatten)]
    capture: &'a CaptureType,
}

pub fn handle<E: RemoteExecutor, C: Clock>(
    orch: &Orchestrator<E, C>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = &orch.settings().capture_types;
    let entries: Vec<TypeEntry<'_>> = orch
        .capture_types()
        .into_iter()
        .filter_map(|name| catalog.get(&name).map(|capture| TypeEntry { name, capture }))
        .collect();

    handle_list(format, &entries, "No capture types configured", |items, out| {
        for entry in items {
            format_type(out, entry);
        }
    })
}

fn format_type(out: &mut dyn Write, entry: &TypeEntry<'_>) {
    let capture = entry.capture;
    let _ = writeln!(out, "{}", color::header(&entry.name));
    if !capture.kernel_events.is_empty() {
        let _ = writeln!(out, "  {} {}", color::context("kernel:"), capture.kernel_events.join(","));
    }
    if capture.syscalls {
        let _ = writeln!(out, "  {} all", color::context("syscalls:"));
    }
    if !capture.userspace_events.is_empty() {
        let _ =
            writeln!(out, "  {} {}", color::context("userspace:"), capture.userspace_events.join(","));
    }
    match capture.processing_op() {
        Some((script, args)) => {
            let _ = writeln!(out, "  {} {} {}", color::context("processing:"), script, args.join(" "));
        }
        None => {
            let _ = writeln!(out, "  {} incomplete", color::context("processing:"));
        }
    }
}
