// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Translation of client-facing enqueue input into backend requests

use pq_domain_types::TaskType;
use pq_rest_api_contract::EnqueueRequest;
use tracing::warn;

use crate::error::{RestClientError, RestClientResult};
use crate::task_types::TaskTypeTable;

/// Turns a payload and a client-facing task-type key into an [`EnqueueRequest`]
///
/// The payload is passed through untouched. The key must be present in the
/// [`TaskTypeTable`]; otherwise translation fails and the caller must not
/// contact the backend.
#[derive(Debug, Clone, Copy)]
pub struct RequestTranslator {
    table: &'static TaskTypeTable,
}

impl Default for RequestTranslator {
    fn default() -> Self {
        Self {
            table: TaskTypeTable::global(),
        }
    }
}

impl RequestTranslator {
    pub fn resolve(&self, type_key: &str) -> RestClientResult<TaskType> {
        self.table.lookup(type_key).ok_or_else(|| {
            warn!(type_key, "rejecting unknown task type key");
            RestClientError::UnknownTaskType {
                key: type_key.to_string(),
            }
        })
    }

    pub fn translate(&self, payload: &str, type_key: &str) -> RestClientResult<EnqueueRequest> {
        let t_type = self.resolve(type_key)?;
        Ok(EnqueueRequest {
            payload: payload.to_string(),
            t_type,
        })
    }
}
