// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;
use tokio::sync::oneshot;
use tv_core::test_support::job_spec;
use tv_core::{FakeClock, JobStatus};

fn build(clock: &FakeClock) -> impl FnOnce(JobId) -> Job + '_ {
    move |id| Job::new(id, "tv", job_spec("cpu", 1), clock)
}

/// Driver that completes the job immediately.
fn complete(clock: FakeClock) -> impl FnOnce(Arc<Job>) -> std::future::Ready<()> {
    move |job| {
        job.advance(JobStatus::CaptureRunning, &clock);
        job.advance(JobStatus::ProcessingRunning, &clock);
        job.advance(JobStatus::Complete, &clock);
        std::future::ready(())
    }
}

#[tokio::test]
async fn ids_start_at_one_and_increase() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    let ids: Vec<u64> =
        (0..3).map(|_| registry.submit(build(&clock), complete(clock.clone())).get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(registry.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_get_consecutive_ids() {
    let clock = FakeClock::new();
    let registry = Arc::new(JobRegistry::new());
    let handles: Vec<_> = (0..32)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let clock = clock.clone();
            tokio::spawn(async move { registry.submit(build(&clock), complete(clock.clone())) })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().get());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    assert_eq!(registry.len(), 32);
}

#[tokio::test]
async fn list_is_in_submission_order() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    for _ in 0..3 {
        registry.submit(build(&clock), |_| std::future::pending::<()>());
    }
    let ids: Vec<u64> = registry.list().iter().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(registry.list().iter().all(|s| s.status == JobStatus::Started));
}

#[tokio::test]
async fn reap_skips_live_jobs() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    let (tx, rx) = oneshot::channel::<()>();
    registry.submit(build(&clock), |_| async move {
        let _ = rx.await;
    });

    assert!(registry.reap().await.is_empty());
    assert_eq!(registry.len(), 1);
    drop(tx);
}

#[tokio::test]
async fn reap_removes_terminal_jobs() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    let done = registry.submit(build(&clock), complete(clock.clone()));
    let (_tx, rx) = oneshot::channel::<()>();
    let live = registry.submit(build(&clock), |_| async move {
        let _ = rx.await;
    });

    assert_eq!(registry.reap().await, vec![done]);
    assert!(registry.get(done).is_none());
    assert_eq!(registry.get(live).map(|s| s.status), Some(JobStatus::Started));
}

#[tokio::test]
async fn reap_waits_for_driver_exit() {
    let clock = FakeClock::new();
    let registry = Arc::new(JobRegistry::new());
    let (gate_tx, gate_rx) = oneshot::channel::<()>();
    let driver_clock = clock.clone();
    let id = registry.submit(build(&clock), move |job| async move {
        job.fail("boom", &driver_clock);
        let _ = gate_rx.await;
    });

    // Let the driver reach its terminal status and block on the gate.
    while !registry.get(id).is_some_and(|s| s.status.is_terminal()) {
        tokio::task::yield_now().await;
    }

    let reaper = tokio::spawn({
        let registry = Arc::clone(&registry);
        async move { registry.reap().await }
    });
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(!reaper.is_finished());
    assert_eq!(registry.len(), 1);

    gate_tx.send(()).unwrap();
    assert_eq!(reaper.await.unwrap(), vec![id]);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn cancelled_reap_leaves_job_reclaimable() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();
    let driver_clock = clock.clone();
    let id = registry.submit(build(&clock), move |job| async move {
        job.fail("boom", &driver_clock);
        let _ = gate_rx.await;
    });
    while !registry.get(id).is_some_and(|s| s.status.is_terminal()) {
        tokio::task::yield_now().await;
    }

    // Give up on the first pass while the driver is still blocked.
    let first = tokio::time::timeout(Duration::from_millis(20), registry.reap()).await;
    assert!(first.is_err());
    assert_eq!(registry.len(), 1);

    gate_tx.send(()).unwrap();
    assert_eq!(registry.reap().await, vec![id]);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn ids_are_not_reused_after_reap() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    registry.submit(build(&clock), complete(clock.clone()));
    registry.reap().await;
    // The first reap may run before the driver task has been polled.
    while !registry.is_empty() {
        tokio::task::yield_now().await;
        registry.reap().await;
    }
    let next = registry.submit(build(&clock), complete(clock.clone()));
    assert_eq!(next, JobId(2));
}

#[tokio::test]
async fn panicking_driver_is_still_reaped() {
    let clock = FakeClock::new();
    let registry = JobRegistry::new();
    let driver_clock = clock.clone();
    let id = registry.submit(build(&clock), move |job| async move {
        job.fail("crashed", &driver_clock);
        panic!("driver crash");
    });
    while registry.reap().await.is_empty() {
        tokio::task::yield_now().await;
    }
    assert!(registry.get(id).is_none());
}
