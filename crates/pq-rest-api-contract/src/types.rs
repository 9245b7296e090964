// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API contract types for the PyQueue REST service

use chrono::{DateTime, NaiveDateTime};
use pq_domain_types::{TaskStatus, TaskType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiContractError;

/// A job as reported by the backend
///
/// Every field is kept exactly as the backend sent it. `type` and `status`
/// stay strings so that values this client does not know about still pass
/// through untouched; use [`Task::parsed_type`] and [`Task::parsed_status`]
/// for typed access. Fields beyond the documented five land in `extra` and
/// are written back out on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub payload: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub status: String,
    /// ISO-8601 timestamp
    pub created_at: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Task {
    pub fn parsed_type(&self) -> Option<TaskType> {
        TaskType::from_str(&self.task_type).ok()
    }

    pub fn parsed_status(&self) -> Option<TaskStatus> {
        TaskStatus::from_str(&self.status).ok()
    }

    /// Parse `created_at`, accepting both offset-qualified and naive timestamps
    ///
    /// Offset timestamps are normalized to UTC.
    pub fn created_at_timestamp(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

/// Body of `POST /api/enqueue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnqueueRequest {
    pub payload: String,
    pub t_type: TaskType,
}

/// Acknowledgement body (`{"message": ...}`)
///
/// Any fields next to `message` are kept in `extra` and written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Success body of a mutating operation
///
/// Depending on the route and backend version the service answers with a
/// job, an acknowledgement message, or something else entirely. The variant
/// is chosen by shape and the body is not altered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobResponse {
    Task(Task),
    Message(MessageResponse),
    Other(serde_json::Value),
}

impl JobResponse {
    pub fn as_task(&self) -> Option<&Task> {
        match self {
            JobResponse::Task(task) => Some(task),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            JobResponse::Message(m) => Some(&m.message),
            _ => None,
        }
    }
}

/// Query parameters for `GET /api/jobs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Parse a status filter the way the backend does (case-insensitive)
pub fn parse_status_filter(value: &str) -> Result<TaskStatus, ApiContractError> {
    TaskStatus::from_str(&value.to_uppercase())
        .map_err(|_| ApiContractError::InvalidStatusFilter(value.to_string()))
}
