// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tracevisor: run LTTng captures on remote hosts and hand them to processing

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tv_adapters::SshExecutor;
use tv_core::SystemClock;
use tv_engine::Orchestrator;

use crate::commands::check::CheckArgs;
use crate::commands::run::RunArgs;
use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tracevisor", version, styles = color::styles())]
#[command(about = "Run remote trace captures and their processing")]
struct Cli {
    /// Configuration file (default: $TRACEVISOR_CONFIG, then the user config dir)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long = "output", short = 'o', value_enum, default_value_t, global = true)]
    format: OutputFormat,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List configured capture types
    Types,
    /// Check that hosts are ready for a capture
    Check(CheckArgs),
    /// Capture on one or more hosts, then process the traces
    Run(RunArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(exit_error::exit_code(&e));
    }
}

async fn run(cli: Cli) -> Result<()> {
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;
    let config = Config::load(cli.config)?;
    let orch = Orchestrator::new(config.settings, SshExecutor::new(config.ssh), SystemClock);

    match cli.command {
        Command::Types => commands::types::handle(&orch, cli.format),
        Command::Check(args) => commands::check::handle(&orch, args, cli.format).await,
        Command::Run(args) => commands::run::handle(&orch, args, cli.format).await,
    }
}
