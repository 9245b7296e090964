// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the PyQueue job service
//!
//! This crate is the boundary between job-queue front ends and the PyQueue
//! backend. It translates the legacy client-facing task-type keys
//! (`"data-cleanup"`, `"takes-long"`, ...) into the backend's canonical
//! enumeration before anything is sent, and hands backend responses back
//! verbatim.
//!
//! Every operation is a single HTTP round trip. Nothing is retried and no
//! timeout is imposed here; wrap calls in `tokio::time::timeout` when a
//! deadline is needed.

pub mod client;
pub mod config;
pub mod error;
pub mod task_types;
pub mod translate;

pub use client::*;
pub use config::*;
pub use error::*;
pub use task_types::*;
pub use translate::*;

use async_trait::async_trait;
use pq_client_api::{ClientApiError, ClientApiResult, JobQueueApi};
use pq_rest_api_contract::{JobResponse, Task, TaskStatus};

impl From<RestClientError> for ClientApiError {
    fn from(err: RestClientError) -> Self {
        match err {
            RestClientError::UnknownTaskType { .. } => {
                ClientApiError::UnknownTaskType(err.to_string())
            }
            other => ClientApiError::Server(other.to_string()),
        }
    }
}

#[async_trait]
impl JobQueueApi for client::QueueClient {
    async fn list_jobs(&self, status: Option<TaskStatus>) -> ClientApiResult<Vec<Task>> {
        Ok(self.list_jobs_with_status(status).await?)
    }

    async fn get_job(&self, id: &str) -> ClientApiResult<Task> {
        Ok(self.get_job(id).await?)
    }

    async fn enqueue_job(&self, payload: &str, type_key: &str) -> ClientApiResult<JobResponse> {
        Ok(self.enqueue_job(payload, type_key).await?)
    }

    async fn delete_job(&self, id: &str) -> ClientApiResult<JobResponse> {
        Ok(self.delete_job(id).await?)
    }

    async fn retry_job(&self, id: &str) -> ClientApiResult<JobResponse> {
        Ok(self.retry_job(id).await?)
    }

    async fn clear_queue(&self) -> ClientApiResult<JobResponse> {
        Ok(self.clear_queue().await?)
    }

    async fn health(&self) -> ClientApiResult<serde_json::Value> {
        Ok(self.health().await?)
    }
}
