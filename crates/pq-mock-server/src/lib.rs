// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! In-memory stand-in for the PyQueue REST API
//!
//! Serves the same routes as the backend (`/api/jobs`, `/api/enqueue`, ...)
//! over a shared [`MockState`]. Every request is recorded before routing so
//! tests can assert how many calls a client made and what it sent, and a
//! status can be forced onto all responses to exercise failure paths.
//! Jobs are never executed; their status only changes when a test sets it.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{MockError, MockResult};
pub use state::{new_task, MockState, RecordedRequest};

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the router over the given state
pub fn router(state: MockState) -> Router {
    let api_routes = Router::new()
        .route("/jobs", get(handlers::list_jobs))
        .route(
            "/jobs/:id",
            get(handlers::get_job).delete(handlers::delete_job),
        )
        .route("/jobs/:id/retry", post(handlers::retry_job))
        .route("/enqueue", post(handlers::enqueue))
        .route("/clear", post(handlers::clear));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes)
        .layer(from_fn_with_state(state.clone(), handlers::record_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the mock API on an already-bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: MockState) -> std::io::Result<()> {
    info!(addr = ?listener.local_addr()?, "mock queue server listening");
    axum::serve(listener, router(state)).await
}

/// A mock server running on a background task
///
/// The listener is bound before this returns, so requests can be sent
/// immediately. The server stops when the value is dropped.
pub struct MockQueueServer {
    addr: SocketAddr,
    state: MockState,
    handle: JoinHandle<()>,
}

impl MockQueueServer {
    /// Start on an ephemeral localhost port with empty state
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with_state(MockState::new()).await
    }

    pub async fn spawn_with_state(state: MockState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server_state = state.clone();
        let handle = tokio::spawn(async move {
            if let Err(err) = serve(listener, server_state).await {
                error!(%err, "mock queue server stopped");
            }
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to hand to a client, e.g. `http://127.0.0.1:41235`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn state(&self) -> &MockState {
        &self.state
    }
}

impl Drop for MockQueueServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
