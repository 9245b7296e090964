// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST client

use pq_domain_types::TaskType;
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

pub type RestClientResult<T> = Result<T, RestClientError>;

/// Backend operation a request belongs to, with the inputs that identify it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListJobs,
    GetJob { id: String },
    EnqueueJob { payload: String, t_type: TaskType },
    DeleteJob { id: String },
    RetryJob { id: String },
    ClearQueue,
    Health,
}

impl Operation {
    /// Short name for log fields
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListJobs => "list_jobs",
            Operation::GetJob { .. } => "get_job",
            Operation::EnqueueJob { .. } => "enqueue_job",
            Operation::DeleteJob { .. } => "delete_job",
            Operation::RetryJob { .. } => "retry_job",
            Operation::ClearQueue => "clear_queue",
            Operation::Health => "health",
        }
    }
}

/// Renders the caller-facing failure message for the operation
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListJobs => write!(f, "Failed to return data for all jobs."),
            Operation::GetJob { id } => {
                write!(f, "Failed to return data for specific job (ID: {}).", id)
            }
            Operation::EnqueueJob { payload, t_type } => write!(
                f,
                "Failed to enqueue new job (payload: {}, type: {}).",
                payload, t_type
            ),
            Operation::DeleteJob { id } => write!(f, "Failed to delete job (ID: {}).", id),
            Operation::RetryJob { id } => write!(f, "Failed to retry job (ID: {}).", id),
            Operation::ClearQueue => write!(f, "Failed to clear the queue."),
            Operation::Health => write!(f, "Failed to reach the queue service."),
        }
    }
}

#[derive(Debug, Error)]
pub enum RestClientError {
    /// Raised before any network activity
    #[error("Unknown task type '{key}'.")]
    UnknownTaskType { key: String },

    /// The backend answered with a non-success status.
    ///
    /// `detail` carries the backend's own explanation (FastAPI `detail`, or
    /// the raw body) and is not part of the message.
    #[error("{operation}")]
    Remote {
        operation: Operation,
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("{operation} ({source})")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} Unexpected response body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Queue service base URL is not configured (set PYQUEUE_API_BASE)")]
    MissingBaseUrl,

    #[error("Invalid queue service base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl RestClientError {
    /// The operation that failed, for errors raised by a backend call
    pub fn operation(&self) -> Option<&Operation> {
        match self {
            RestClientError::Remote { operation, .. }
            | RestClientError::Transport { operation, .. }
            | RestClientError::Decode { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// HTTP status of a rejected call
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided explanation of a rejected call
    pub fn detail(&self) -> Option<&str> {
        match self {
            RestClientError::Remote { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
