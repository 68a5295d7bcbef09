// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use tv_core::test_support::job_spec;
use tv_core::{FakeClock, Job, JobId, JobStatus};

fn render(f: impl FnOnce(&mut dyn Write)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

fn jobs() -> Vec<JobSnapshot> {
    let clock = FakeClock::new();
    let running = Job::new(JobId(1), "tv", job_spec("cpu", 5), &clock);
    running.advance(JobStatus::CaptureRunning, &clock);
    let failed = Job::new(JobId(12), "tv", job_spec("io", 5), &clock);
    failed.fail("enable syscalls: exit status 1", &clock);
    vec![running.snapshot(), failed.snapshot()]
}

#[test]
#[serial]
fn job_table_aligns_columns() {
    std::env::set_var("NO_COLOR", "1");
    let text = render(|out| format_job_table(out, &jobs()));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID  STATUS           TYPE  HOST  SESSION"));
    assert!(lines[1].starts_with("1   capture_running  cpu   h1    tv-cpu-20260130-080000-1"));
    assert!(lines[2].starts_with("12  error            io    h1    tv-io-20260130-080000-12"));
    assert_eq!(lines[3], "    error: enable syscalls: exit status 1");
}

#[test]
#[serial]
fn job_detail_lists_history() {
    std::env::set_var("NO_COLOR", "1");
    let job = &jobs()[0];
    let text = render(|out| format_job_detail(out, job));

    assert!(text.starts_with("Job: 1\n"));
    assert!(text.contains("  Status: capture_running\n"));
    assert!(text.contains("    2026-01-30 08:00:00  started\n"));
    assert!(text.contains("    2026-01-30 08:00:00  capture_running\n"));
    assert!(!text.contains("Error:"));
}

#[test]
fn snapshot_json_uses_wire_status_names() {
    let json = serde_json::to_value(&jobs()[1]).unwrap();
    assert_eq!(json["status"], "ERROR");
    assert_eq!(json["id"], 12);
    assert_eq!(json["error"], "enable syscalls: exit status 1");
}
