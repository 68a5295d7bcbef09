// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn root_at(host: &str) -> Target {
    Target::new(host, "root").unwrap()
}

#[tokio::test]
async fn records_calls_and_defaults_to_success() {
    let fake = FakeExecutor::new();
    let out = fake.run(&root_at("h1"), &RemoteCommand::new("lttng").arg("list")).await.unwrap();
    assert_eq!(out, RemoteOutput::default());
    assert_eq!(fake.lines(), vec!["root@h1 lttng list"]);
}

#[tokio::test]
async fn hostname_echoes_target() {
    let fake = FakeExecutor::new();
    let out = fake.run(&root_at("web-3"), &RemoteCommand::new("hostname").arg("-s")).await.unwrap();
    assert_eq!(out.stdout, "web-3\n");
}

#[tokio::test]
async fn first_matching_rule_wins() {
    let fake = FakeExecutor::new();
    fake.fail("root@h2 lttng start", "no session daemon").respond("lttng start", "started");

    let ok = fake.run(&root_at("h1"), &RemoteCommand::new("lttng").arg("start")).await.unwrap();
    assert_eq!(ok.stdout, "started");

    let err = fake.run(&root_at("h2"), &RemoteCommand::new("lttng").arg("start")).await.unwrap_err();
    assert_eq!(err.to_string(), "exit status 1: no session daemon");
    assert_eq!(fake.count("lttng start"), 2);
    assert_eq!(fake.calls()[1].target.host, "h2");
}
