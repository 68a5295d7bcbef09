// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn target() -> Target {
    Target::new("h1", "alice").unwrap()
}

#[test]
fn default_config() {
    let config = SshConfig::default();
    assert_eq!(config.binary, "ssh");
    assert_eq!(config.connect_timeout_secs, 10);
    assert_eq!(config.command_timeout(), REMOTE_COMMAND_TIMEOUT);
}

#[test]
fn config_from_toml_keeps_defaults() {
    let config: SshConfig = toml::from_str(
        r#"
        identity = "/home/op/.ssh/id_rsa_tracevisor"
        command_timeout_secs = 30
        "#,
    )
    .unwrap();
    assert_eq!(config.identity, Some(PathBuf::from("/home/op/.ssh/id_rsa_tracevisor")));
    assert_eq!(config.command_timeout(), Duration::from_secs(30));
    assert_eq!(config.binary, "ssh");
}

#[test]
fn args_are_batch_mode_and_end_with_quoted_command() {
    let exec = SshExecutor::default();
    let cmd = RemoteCommand::new("lttng").arg("start").arg("tv cpu");
    let args = exec.ssh_args(&target(), &cmd);
    assert_eq!(
        args,
        vec![
            "-oBatchMode=yes",
            "-oStrictHostKeyChecking=no",
            "-oConnectTimeout=10",
            "-l",
            "alice",
            "--",
            "h1",
            "lttng start 'tv cpu'",
        ]
    );
}

#[test]
fn identity_is_passed() {
    let exec = SshExecutor::new(SshConfig {
        identity: Some(PathBuf::from("/keys/id")),
        ..Default::default()
    });
    let args = exec.ssh_args(&target(), &RemoteCommand::new("id"));
    let i = args.iter().position(|a| a == "-i").unwrap();
    assert_eq!(args[i + 1], "/keys/id");
}

/// Stand-in ssh binary: a shell script that receives the ssh arguments.
fn fake_ssh(dir: &std::path::Path, body: &str) -> SshConfig {
    let path = dir.join("fake-ssh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    SshConfig { binary: path.display().to_string(), command_timeout_secs: 5, ..Default::default() }
}

#[cfg(unix)]
#[tokio::test]
async fn run_returns_stdout_on_success() {
    let dir = tempfile::tempdir().unwrap();
    // last positional argument is the rendered command
    let exec = SshExecutor::new(fake_ssh(dir.path(), r#"for a; do last="$a"; done; echo "$last""#));
    let out = exec.run(&target(), &RemoteCommand::new("hostname").arg("-s")).await.unwrap();
    assert_eq!(out.stdout.trim(), "hostname -s");
}

#[cfg(unix)]
#[tokio::test]
async fn run_maps_non_zero_exit_to_failed() {
    let dir = tempfile::tempdir().unwrap();
    let exec = SshExecutor::new(fake_ssh(dir.path(), "echo 'Error: Session not found' >&2; exit 1"));
    let err = exec.run(&target(), &RemoteCommand::new("lttng").arg("stop")).await.unwrap_err();
    assert!(matches!(err, RemoteError::Failed { code: Some(1), .. }));
    assert_eq!(err.to_string(), "exit status 1: Error: Session not found");
}
