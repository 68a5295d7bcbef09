// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading.
//!
//! Path priority: `--config` > `TRACEVISOR_CONFIG` > default config dir.
//! A missing file at the default location means built-in defaults; a
//! missing file that was named explicitly is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tv_adapters::SshConfig;
use tv_engine::Settings;

use crate::env;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Everything read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub settings: Settings,
    pub ssh: SshConfig,
}

impl Config {
    /// Load from the first configured location.
    pub fn load(flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        match flag.or_else(env::config_override) {
            Some(path) => Self::read(&path),
            None => match env::default_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.ssh.identity = config.ssh.identity.map(env::expand_home);
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
