// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote machines and network endpoints a job talks to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from validating caller-supplied host, user, or endpoint fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} `{value}` must not start with '-'")]
    LeadingDash { field: &'static str, value: String },
    #[error("{field} `{value}` contains whitespace or control characters")]
    BadCharacter { field: &'static str, value: String },
    #[error("endpoint `{0}` is not in host:port form")]
    MissingPort(String),
    #[error("endpoint `{0}` has an invalid port")]
    BadPort(String),
}

/// Reject values the ssh client would read as options or split into words.
fn check_field(field: &'static str, value: &str) -> Result<(), TargetError> {
    if value.is_empty() {
        return Err(TargetError::Empty { field });
    }
    if value.starts_with('-') {
        return Err(TargetError::LeadingDash { field, value: value.to_string() });
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(TargetError::BadCharacter { field, value: value.to_string() });
    }
    Ok(())
}

/// A machine reached over the remote transport, as a given user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub host: String,
    pub user: String,
}

impl Target {
    /// Build a validated target.
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Result<Self, TargetError> {
        let target = Self { host: host.into(), user: user.into() };
        check_field("host", &target.host)?;
        check_field("user", &target.user)?;
        Ok(target)
    }

    /// Same user on a different host (processing runs as the capture's user).
    pub fn with_host(&self, host: impl Into<String>) -> Result<Self, TargetError> {
        Self::new(host, self.user.clone())
    }

    pub fn is_root(&self) -> bool {
        self.user == "root"
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}

/// A `host:port` pair, e.g. the results sink.
///
/// Serializes to/from its display string. IPv6 hosts are bracketed: `[::1]:27017`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, TargetError> {
        let host = host.into();
        check_field("endpoint host", &host)?;
        Ok(Self { host, port })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Endpoint {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s.rsplit_once(':').ok_or_else(|| TargetError::MissingPort(s.into()))?;
        let host = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(host);
        let port = port.parse::<u16>().map_err(|_| TargetError::BadPort(s.into()))?;
        Endpoint::new(host, port)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
