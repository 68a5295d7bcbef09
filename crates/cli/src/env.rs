// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Names a configuration file, like `--config`
pub const CONFIG_ENV: &str = "TRACEVISOR_CONFIG";

/// Configuration file named by `TRACEVISOR_CONFIG`, if set and non-empty.
pub fn config_override() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default configuration file: `XDG_CONFIG_HOME/tracevisor/config.toml`
/// (platform config dir elsewhere).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tracevisor").join("config.toml"))
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: PathBuf) -> PathBuf {
    if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), dirs::home_dir()) {
        return home.join(rest);
    }
    path
}
