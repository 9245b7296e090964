// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client interface for the PyQueue job service
//!
//! Consumers program against [`JobQueueApi`] rather than a concrete HTTP
//! client, which lets the CLI and other front ends run against fakes in tests.

use async_trait::async_trait;
use pq_rest_api_contract::{JobResponse, Task, TaskStatus};
use thiserror::Error;

pub type ClientApiResult<T> = Result<T, ClientApiError>;

#[derive(Debug, Error)]
pub enum ClientApiError {
    /// The client-facing task-type key has no canonical counterpart
    #[error("{0}")]
    UnknownTaskType(String),

    #[error("{0}")]
    Server(String),
}

#[async_trait]
pub trait JobQueueApi: Send + Sync {
    async fn list_jobs(&self, status: Option<TaskStatus>) -> ClientApiResult<Vec<Task>>;

    async fn get_job(&self, id: &str) -> ClientApiResult<Task>;

    /// Submit a job under a client-facing task-type key (e.g. `"data-cleanup"`)
    async fn enqueue_job(&self, payload: &str, type_key: &str) -> ClientApiResult<JobResponse>;

    async fn delete_job(&self, id: &str) -> ClientApiResult<JobResponse>;

    async fn retry_job(&self, id: &str) -> ClientApiResult<JobResponse>;

    async fn clear_queue(&self) -> ClientApiResult<JobResponse>;

    async fn health(&self) -> ClientApiResult<serde_json::Value>;
}
