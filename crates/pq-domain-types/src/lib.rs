// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the PyQueue job service
//!
//! These enums mirror the enumerations owned by the PyQueue backend. They are
//! shared by the wire contract, the REST client and the CLI so that every
//! component agrees on the canonical spelling of task types and statuses.

pub mod task;

pub use task::{TaskStatus, TaskType};
