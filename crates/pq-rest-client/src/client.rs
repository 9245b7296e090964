// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use pq_rest_api_contract::{EnqueueRequest, ErrorDetail, JobResponse, JobsQuery, Task, TaskStatus};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Operation, RestClientError, RestClientResult};
use crate::translate::RequestTranslator;

/// REST API client for the PyQueue backend
///
/// Stateless apart from the pooled HTTP connection: every method performs
/// exactly one request and returns the decoded response body as sent.
#[derive(Debug, Clone)]
pub struct QueueClient {
    http_client: HttpClient,
    config: ClientConfig,
    translator: RequestTranslator,
}

impl QueueClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> RestClientResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("pyq/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RestClientError::HttpClient)?;

        Ok(Self {
            http_client,
            config,
            translator: RequestTranslator::default(),
        })
    }

    /// Create a client from a base URL string
    pub fn from_url(api_base: &str) -> RestClientResult<Self> {
        Self::new(ClientConfig::new(api_base)?)
    }

    /// Create a client from `PYQUEUE_API_BASE`
    pub fn from_env() -> RestClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List all jobs
    pub async fn list_jobs(&self) -> RestClientResult<Vec<Task>> {
        self.list_jobs_with_status(None).await
    }

    /// List jobs, optionally only those in the given state
    pub async fn list_jobs_with_status(
        &self,
        status: Option<TaskStatus>,
    ) -> RestClientResult<Vec<Task>> {
        let url = self.config.endpoint(&["api", "jobs"]);
        let query = JobsQuery { status };
        let request = self.http_client.get(url).query(&query);
        self.execute(Operation::ListJobs, request).await
    }

    /// Get a specific job
    pub async fn get_job(&self, id: &str) -> RestClientResult<Task> {
        let operation = Operation::GetJob { id: id.to_string() };
        self.send(operation, Method::GET, &["api", "jobs", id]).await
    }

    /// Submit a new job under a client-facing task-type key
    ///
    /// Fails with [`RestClientError::UnknownTaskType`] without touching the
    /// network when the key is not in the reconciliation table.
    pub async fn enqueue_job(
        &self,
        payload: &str,
        type_key: &str,
    ) -> RestClientResult<JobResponse> {
        let request = self.translator.translate(payload, type_key)?;
        self.submit(request).await
    }

    /// Delete a job
    pub async fn delete_job(&self, id: &str) -> RestClientResult<JobResponse> {
        let operation = Operation::DeleteJob { id: id.to_string() };
        self.send(operation, Method::DELETE, &["api", "jobs", id]).await
    }

    /// Ask the backend to retry a job
    pub async fn retry_job(&self, id: &str) -> RestClientResult<JobResponse> {
        let operation = Operation::RetryJob { id: id.to_string() };
        self.send(operation, Method::POST, &["api", "jobs", id, "retry"]).await
    }

    /// Remove every job from the queue
    pub async fn clear_queue(&self) -> RestClientResult<JobResponse> {
        self.send(Operation::ClearQueue, Method::POST, &["api", "clear"]).await
    }

    /// Probe the service root
    pub async fn health(&self) -> RestClientResult<serde_json::Value> {
        self.send(Operation::Health, Method::GET, &[]).await
    }

    // Private helper methods

    // Only reachable through `enqueue_job`, so every task type sent has
    // passed the reconciliation table.
    async fn submit(&self, request: EnqueueRequest) -> RestClientResult<JobResponse> {
        let operation = Operation::EnqueueJob {
            payload: request.payload.clone(),
            t_type: request.t_type,
        };
        let url = self.config.endpoint(&["api", "enqueue"]);
        let builder = self.http_client.post(url).json(&request);
        self.execute(operation, builder).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        segments: &[&str],
    ) -> RestClientResult<T> {
        let url = self.config.endpoint(segments);
        let request = self.http_client.request(method, url);
        self.execute(operation, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> RestClientResult<T> {
        let request = match request.build() {
            Ok(request) => request,
            Err(source) => return Err(RestClientError::Transport { operation, source }),
        };
        debug!(
            operation = operation.name(),
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );

        match self.http_client.execute(request).await {
            Ok(response) => self.handle_response(operation, response).await,
            Err(source) => {
                warn!(operation = operation.name(), error = %source, "request failed");
                Err(RestClientError::Transport { operation, source })
            }
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: Response,
    ) -> RestClientResult<T> {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(source) => return Err(RestClientError::Transport { operation, source }),
        };

        if status.is_success() {
            debug!(operation = operation.name(), %status, "request succeeded");
            serde_json::from_str(&text)
                .map_err(|source| RestClientError::Decode { operation, source })
        } else {
            let detail = match serde_json::from_str::<ErrorDetail>(&text) {
                Ok(problem) => Some(problem.message()),
                Err(_) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
            };
            warn!(
                operation = operation.name(),
                %status,
                detail = detail.as_deref().unwrap_or_default(),
                "backend rejected request"
            );
            Err(RestClientError::Remote {
                operation,
                status,
                detail,
            })
        }
    }
}
