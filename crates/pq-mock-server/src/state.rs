// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared in-memory state of the mock queue

use axum::http::StatusCode;
use pq_domain_types::{TaskStatus, TaskType};
use pq_rest_api_contract::Task;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{MockError, MockResult};

/// A request as seen by the mock server, before routing
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path exactly as sent, percent-encoding included
    pub path: String,
    pub query: Option<String>,
    /// Body parsed as JSON, when it was JSON
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct Inner {
    // Insertion order, as the backend's registry returns it
    jobs: Vec<Task>,
    requests: Vec<RecordedRequest>,
    forced_status: Option<StatusCode>,
}

/// Handle to the mock queue; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct MockState {
    inner: Arc<RwLock<Inner>>,
}

/// Build a fresh queued job the way the backend does
pub fn new_task(payload: &str, t_type: TaskType) -> Task {
    fresh_task(payload, t_type.as_ref())
}

fn fresh_task(payload: &str, task_type: &str) -> Task {
    Task {
        id: format!("Task-{}", uuid::Uuid::new_v4()),
        payload: payload.to_string(),
        task_type: task_type.to_string(),
        status: TaskStatus::Queued.to_string(),
        created_at: chrono::Utc::now()
            .naive_utc()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        extra: Default::default(),
    }
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job directly, bypassing HTTP
    pub async fn seed(&self, task: Task) {
        self.inner.write().await.jobs.push(task);
    }

    /// Insert a fresh job with the given status and return it
    pub async fn seed_job(&self, payload: &str, t_type: TaskType, status: TaskStatus) -> Task {
        let mut task = new_task(payload, t_type);
        task.status = status.to_string();
        self.seed(task.clone()).await;
        task
    }

    pub async fn jobs(&self) -> Vec<Task> {
        self.inner.read().await.jobs.clone()
    }

    pub async fn job(&self, id: &str) -> Option<Task> {
        self.inner.read().await.jobs.iter().find(|t| t.id == id).cloned()
    }

    pub async fn enqueue(&self, payload: &str, t_type: TaskType) -> Task {
        let task = new_task(payload, t_type);
        self.seed(task.clone()).await;
        task
    }

    /// Remove a job; `false` when no job had that id
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.jobs.len();
        inner.jobs.retain(|t| t.id != id);
        inner.jobs.len() != before
    }

    /// Re-enqueue a copy of a failed job under a new id
    pub async fn retry(&self, id: &str) -> MockResult<Task> {
        let mut inner = self.inner.write().await;
        let original = inner.jobs.iter().find(|t| t.id == id).ok_or_else(|| {
            MockError::NotFound(format!("Job {id} not found. Could not be retried."))
        })?;

        let retryable = original.parsed_status().is_some_and(TaskStatus::is_retryable);
        if !retryable {
            return Err(MockError::BadRequest(format!(
                "Job {id} is not a failed Task. Can only retry failed Tasks."
            )));
        }

        let clone = fresh_task(&original.payload, &original.task_type);
        inner.jobs.push(clone.clone());
        Ok(clone)
    }

    pub async fn clear(&self) {
        self.inner.write().await.jobs.clear();
    }

    pub async fn set_status(&self, id: &str, status: TaskStatus) -> bool {
        let mut inner = self.inner.write().await;
        match inner.jobs.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Answer every subsequent request with `status` (or stop doing so)
    pub async fn force_status(&self, status: Option<StatusCode>) {
        self.inner.write().await.forced_status = status;
    }

    pub async fn forced_status(&self) -> Option<StatusCode> {
        self.inner.read().await.forced_status
    }

    pub async fn record(&self, request: RecordedRequest) {
        self.inner.write().await.requests.push(request);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.read().await.requests.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.inner.read().await.requests.len()
    }
}
