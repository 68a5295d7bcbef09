// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide job table.
//!
//! One mutex guards the map and the id counter; each job's status has its
//! own mutex inside [`Job`]. The registry lock is never held across an
//! `.await`.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tv_core::{Job, JobId, JobSnapshot};

struct Entry {
    job: Arc<Job>,
    /// Taken by the reap pass that joins it, restored if that pass is dropped
    task: Option<JoinHandle<()>>,
}

struct RegistryInner {
    next_id: u64,
    jobs: IndexMap<JobId, Entry>,
}

pub struct JobRegistry {
    inner: Mutex<RegistryInner>,
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self { inner: Mutex::new(RegistryInner { next_id: 1, jobs: IndexMap::new() }) }
    }
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id, register the job built for it, and spawn its
    /// driver. Returns without waiting on the driver.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit<B, D, Fut>(&self, build: B, driver: D) -> JobId
    where
        B: FnOnce(JobId) -> Job,
        D: FnOnce(Arc<Job>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let id = JobId(inner.next_id);
        inner.next_id += 1;
        let job = Arc::new(build(id));
        let task = tokio::spawn(driver(Arc::clone(&job)));
        inner.jobs.insert(id, Entry { job, task: Some(task) });
        id
    }

    /// Snapshots of every registered job, in submission order.
    pub fn list(&self) -> Vec<JobSnapshot> {
        self.inner.lock().jobs.values().map(|e| e.job.snapshot()).collect()
    }

    pub fn get(&self, id: JobId) -> Option<JobSnapshot> {
        self.inner.lock().jobs.get(&id).map(|e| e.job.snapshot())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().jobs.is_empty()
    }

    /// Remove terminal jobs once their driver task has exited.
    ///
    /// Live jobs are never touched. A job whose handle another reap pass is
    /// already joining is left to that pass. Returns the removed ids.
    pub async fn reap(&self) -> Vec<JobId> {
        self.reap_matching(|_| true).await
    }

    /// [`reap`](Self::reap) restricted to the ids `select` accepts.
    pub async fn reap_matching(&self, select: impl Fn(JobId) -> bool) -> Vec<JobId> {
        let handles: VecDeque<(JobId, JoinHandle<()>)> = {
            let mut inner = self.inner.lock();
            inner
                .jobs
                .iter_mut()
                .filter(|(id, e)| select(**id) && e.job.is_terminal())
                .filter_map(|(id, e)| e.task.take().map(|task| (*id, task)))
                .collect()
        };
        let mut pending = PendingJoins { registry: self, handles };

        let mut joined = Vec::with_capacity(pending.handles.len());
        while let Some((id, task)) = pending.handles.front_mut() {
            let id = *id;
            if let Err(e) = task.await {
                tracing::warn!(job_id = %id, error = %e, "job driver did not exit cleanly");
            }
            pending.handles.pop_front();
            self.inner.lock().jobs.shift_remove(&id);
            joined.push(id);
        }

        if !joined.is_empty() {
            tracing::debug!(count = joined.len(), "reaped jobs");
        }
        joined
    }
}

/// Handles taken by a reap pass but not yet joined.
///
/// If the pass is dropped mid-join they go back to their entries so a later
/// pass can reclaim those jobs.
struct PendingJoins<'a> {
    registry: &'a JobRegistry,
    handles: VecDeque<(JobId, JoinHandle<()>)>,
}

impl Drop for PendingJoins<'_> {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        let mut inner = self.registry.inner.lock();
        for (id, task) in self.handles.drain(..) {
            if let Some(entry) = inner.jobs.get_mut(&id) {
                entry.task = Some(task);
            }
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
