// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Reconciliation of client-facing task-type keys with backend task types
//!
//! Front ends written before the backend switched to enumerated task types
//! still use lowercase, hyphenated keys such as `"data-cleanup"`. The table
//! below is the single place those keys are mapped to [`TaskType`]. Lookups
//! are exact and case-sensitive; a key that is not listed is invalid and is
//! never mapped to a default.

use pq_domain_types::TaskType;
use std::collections::HashMap;
use std::sync::OnceLock;

static TASK_TYPE_KEYS: [(&str, TaskType); 8] = [
    ("email", TaskType::Email),
    ("report", TaskType::Report),
    ("data-cleanup", TaskType::DataCleanup),
    ("sms", TaskType::Sms),
    ("newsletter", TaskType::Newsletter),
    ("takes-long", TaskType::TakesLong),
    ("fail", TaskType::Fail),
    ("fail-absolute", TaskType::FailAbsolute),
];

/// Immutable mapping from client-facing keys to canonical task types
#[derive(Debug)]
pub struct TaskTypeTable {
    index: HashMap<&'static str, TaskType>,
}

impl TaskTypeTable {
    /// The process-wide table, built on first use
    pub fn global() -> &'static TaskTypeTable {
        static TABLE: OnceLock<TaskTypeTable> = OnceLock::new();
        TABLE.get_or_init(|| TaskTypeTable {
            index: TASK_TYPE_KEYS.iter().copied().collect(),
        })
    }

    pub fn lookup(&self, key: &str) -> Option<TaskType> {
        self.index.get(key).copied()
    }

    /// `(key, canonical)` pairs in their documented order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, TaskType)> {
        TASK_TYPE_KEYS.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Look a key up in the process-wide table
pub fn lookup_task_type(key: &str) -> Option<TaskType> {
    TaskTypeTable::global().lookup(key)
}
