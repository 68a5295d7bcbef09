// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn target_display() {
    let t = Target::new("h1", "root").unwrap();
    assert_eq!(t.to_string(), "root@h1");
    assert!(t.is_root());
}

#[parameterized(
    empty_host = { "", "root" },
    empty_user = { "h1", "" },
    option_host = { "-oProxyCommand=touch", "root" },
    option_user = { "h1", "-lroot" },
    spaced_host = { "h1 h2", "root" },
    newline_user = { "h1", "root\nid" },
)]
fn target_rejects(host: &str, user: &str) {
    assert!(Target::new(host, user).is_err());
}

#[test]
fn with_host_keeps_user() {
    let t = Target::new("h1", "alice").unwrap();
    let p = t.with_host("analysis-1").unwrap();
    assert_eq!(p.to_string(), "alice@analysis-1");
    assert!(!p.is_root());
}

#[parameterized(
    ipv4 = { "127.0.0.1:27017", "127.0.0.1", 27017 },
    name = { "sink.example.net:9000", "sink.example.net", 9000 },
    ipv6 = { "[::1]:27017", "::1", 27017 },
)]
fn endpoint_parses(input: &str, host: &str, port: u16) {
    let e: Endpoint = input.parse().unwrap();
    assert_eq!(e.host, host);
    assert_eq!(e.port, port);
    assert_eq!(e.to_string(), input);
}

#[test]
fn endpoint_errors() {
    assert_eq!(
        "localhost".parse::<Endpoint>(),
        Err(TargetError::MissingPort("localhost".into()))
    );
    assert_eq!(
        "localhost:99999".parse::<Endpoint>(),
        Err(TargetError::BadPort("localhost:99999".into()))
    );
}

#[test]
fn endpoint_serde_as_string() {
    let e = Endpoint::new("10.0.0.5", 27017).unwrap();
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, "\"10.0.0.5:27017\"");
    let parsed: Endpoint = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, e);
}
