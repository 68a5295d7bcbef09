// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_document_is_all_defaults() {
    let settings: Settings = toml::from_str("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.capture_types.names().collect::<Vec<_>>(), vec!["cpu", "io"]);
    assert_eq!(settings.defaults.results_sink.to_string(), "127.0.0.1:27017");
}

#[test]
fn partial_tables_keep_remaining_defaults() {
    let settings: Settings = toml::from_str(
        r#"
        app_name = "lab"
        teardown_on_failure = true

        [defaults]
        relay = "relay.lab"
        results_sink = "sink.lab:9000"

        [processing]
        interpreter = ""
        "#,
    )
    .unwrap();
    assert_eq!(settings.app_name, "lab");
    assert!(settings.teardown_on_failure);
    assert_eq!(settings.trace_root, "/root/lttng-traces");
    assert_eq!(settings.defaults.relay, "relay.lab");
    assert!(settings.defaults.processing.is_none());
    assert_eq!(settings.defaults.results_sink.port, 9000);
    assert_eq!(settings.processing.interpreter, "");
    assert_eq!(settings.processing.sink_host_flag, "--mongo-host");
}

#[test]
fn configured_catalog_replaces_builtin() {
    let settings: Settings = toml::from_str(
        r#"
        [capture_types.mem]
        kernel_events = ["kmem_mm_page_alloc"]
        "#,
    )
    .unwrap();
    assert_eq!(settings.capture_types.names().collect::<Vec<_>>(), vec!["mem"]);
}

#[test]
fn bad_sink_is_a_load_error() {
    let err = toml::from_str::<Settings>(
        r#"
        [defaults]
        results_sink = "no-port"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("host:port"));
}
