// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Handler errors, rendered the way FastAPI renders `HTTPException`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pq_rest_api_contract::ErrorDetail;

pub type MockResult<T> = Result<T, MockError>;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Status forced on every request by the test driving the server
    #[error("Injected failure")]
    Injected(StatusCode),
}

impl MockError {
    pub fn status(&self) -> StatusCode {
        match self {
            MockError::NotFound(_) => StatusCode::NOT_FOUND,
            MockError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MockError::Injected(status) => *status,
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let body = ErrorDetail::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
