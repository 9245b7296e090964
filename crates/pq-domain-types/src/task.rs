// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Task-related domain enums
//!
//! Both enums serialize as their uppercase backend name (`"EMAIL"`,
//! `"FAILED"`) and parse case-sensitively from it.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Task types understood by the backend
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TaskType {
    Email,
    Report,
    DataCleanup,
    Sms,
    Newsletter,
    TakesLong,
    Fail,
    #[serde(rename = "FAILABS")]
    #[strum(serialize = "FAILABS")]
    FailAbsolute,
    /// Backend-only type; no client-facing key resolves to it
    Test,
}

/// Lifecycle states reported by the backend for a job
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TaskStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Whether the backend accepts a retry request for a job in this state
    pub fn is_retryable(self) -> bool {
        self == TaskStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_task_type_canonical_names() {
        let names: Vec<String> = TaskType::iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "EMAIL",
                "REPORT",
                "DATACLEANUP",
                "SMS",
                "NEWSLETTER",
                "TAKESLONG",
                "FAIL",
                "FAILABS",
                "TEST"
            ]
        );
    }

    #[test]
    fn test_task_type_serde_matches_display() {
        for task_type in TaskType::iter() {
            let json = serde_json::to_string(&task_type).unwrap();
            assert_eq!(json, format!("\"{}\"", task_type));
            let back: TaskType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, task_type);
        }
    }

    #[test]
    fn test_task_type_parse_is_case_sensitive() {
        assert_eq!(TaskType::from_str("DATACLEANUP").unwrap(), TaskType::DataCleanup);
        assert!(TaskType::from_str("datacleanup").is_err());
        assert!(TaskType::from_str("DataCleanup").is_err());
        assert!(TaskType::from_str("").is_err());
    }

    #[test]
    fn test_task_status_names() {
        assert_eq!(TaskStatus::InProgress.as_ref(), "INPROGRESS");
        assert_eq!(TaskStatus::from_str("FAILED").unwrap(), TaskStatus::Failed);
        assert!(TaskStatus::from_str("failed").is_err());
        assert_eq!(TaskStatus::iter().count(), 4);
    }

    #[test]
    fn test_only_failed_is_retryable() {
        let retryable: Vec<TaskStatus> = TaskStatus::iter().filter(|s| s.is_retryable()).collect();
        assert_eq!(retryable, vec![TaskStatus::Failed]);
    }
}
