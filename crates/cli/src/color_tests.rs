// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color(on: bool) {
    if on {
        std::env::set_var("COLOR", "1");
        std::env::remove_var("NO_COLOR");
    } else {
        std::env::set_var("NO_COLOR", "1");
        std::env::remove_var("COLOR");
    }
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    force_color(false);
    assert_eq!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color(true);
    assert_ne!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn status_colors_follow_outcome() {
    force_color(true);
    assert!(status(JobStatus::Complete).starts_with("\x1b[38;5;114m"));
    assert!(status(JobStatus::Error).starts_with("\x1b[38;5;167m"));
    assert!(status(JobStatus::CaptureRunning).contains("capture_running"));
    assert!(header("Job:").ends_with("\x1b[0m"));
}

#[test]
#[serial]
fn plain_text_without_color() {
    force_color(false);
    assert_eq!(status(JobStatus::ProcessingRunning), "processing_running");
    assert_eq!(context("Host:"), "Host:");
}
