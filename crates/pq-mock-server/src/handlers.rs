// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Route handlers mirroring the PyQueue backend

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use pq_rest_api_contract::{parse_status_filter, EnqueueRequest, MessageResponse, Task};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{MockError, MockResult};
use crate::state::{MockState, RecordedRequest};

/// Record every request and apply any forced failure status
pub async fn record_requests(
    State(state): State<MockState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => return MockError::BadRequest(err.to_string()).into_response(),
    };

    state
        .record(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
            body: serde_json::from_slice(&bytes).ok(),
        })
        .await;

    if let Some(status) = state.forced_status().await {
        debug!(%status, path = parts.uri.path(), "answering with forced status");
        return MockError::Injected(status).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

pub async fn list_jobs(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> MockResult<Json<Vec<Task>>> {
    let status = match params.get("status") {
        Some(raw) => Some(
            parse_status_filter(raw)
                .map_err(|_| MockError::BadRequest("Invalid status filter".to_string()))?,
        ),
        None => None,
    };

    let jobs = state
        .jobs()
        .await
        .into_iter()
        .filter(|t| status.map_or(true, |s| t.parsed_status() == Some(s)))
        .collect();
    Ok(Json(jobs))
}

pub async fn get_job(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<Task>> {
    state
        .job(&id)
        .await
        .map(Json)
        .ok_or_else(|| MockError::NotFound(format!("Job {id} not found")))
}

pub async fn enqueue(
    State(state): State<MockState>,
    Json(request): Json<EnqueueRequest>,
) -> Json<MessageResponse> {
    let task = state.enqueue(&request.payload, request.t_type).await;
    Json(MessageResponse::new(format!(
        "Job {} (Payload: {}, Type: {}) enqueued!",
        task.id, task.payload, task.task_type
    )))
}

pub async fn retry_job(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<Task>> {
    state.retry(&id).await.map(Json)
}

pub async fn delete_job(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<MessageResponse>> {
    if !state.delete(&id).await {
        return Err(MockError::NotFound(format!(
            "Job {id} not found. Could not be deleted."
        )));
    }
    Ok(Json(MessageResponse::new(format!("Job {id} deleted!"))))
}

pub async fn clear(State(state): State<MockState>) -> Json<MessageResponse> {
    state.clear().await;
    Json(MessageResponse::new("All jobs in the queue cleared!"))
}
