// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! PyQueue REST API contract types
//!
//! This crate defines the request and response shapes exchanged with the
//! PyQueue backend. The backend owns these shapes; the types here decode them
//! without renaming or coercing any field so that callers see exactly what
//! the service sent. They are shared by the REST client, the mock server and
//! the CLI.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

pub use pq_domain_types::{TaskStatus, TaskType};
