// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client configuration
//!
//! The only setting is the backend base URL. It is resolved once, normally
//! from `PYQUEUE_API_BASE`, and then handed to [`crate::QueueClient::new`].

use serde::Deserialize;
use url::Url;

use crate::error::{RestClientError, RestClientResult};

/// Environment variable holding the backend base URL
pub const API_BASE_ENV: &str = "PYQUEUE_API_BASE";

const ENV_PREFIX: &str = "PYQUEUE";

/// Raw settings as read from the environment (`PYQUEUE_API_BASE` -> `api_base`)
#[derive(Debug, Default, Deserialize)]
struct EnvSettings {
    #[serde(default)]
    api_base: Option<String>,
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL with trailing slashes stripped
    api_base: String,
    base_url: Url,
}

impl ClientConfig {
    /// Build a configuration from a base URL string
    ///
    /// Surrounding whitespace and then trailing slashes are stripped; what
    /// remains must be an absolute URL that paths can be appended to.
    pub fn new(api_base: &str) -> RestClientResult<Self> {
        let trimmed = api_base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(RestClientError::MissingBaseUrl);
        }

        let base_url = Url::parse(trimmed).map_err(|e| RestClientError::InvalidBaseUrl {
            value: api_base.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RestClientError::InvalidBaseUrl {
                value: api_base.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            api_base: trimmed.to_string(),
            base_url,
        })
    }

    /// Read the base URL from the process environment
    pub fn from_env() -> RestClientResult<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Read the base URL from an explicit variable map instead of the process
    /// environment
    pub fn from_env_source(vars: config::Map<String, String>) -> RestClientResult<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: config::Environment) -> RestClientResult<Self> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()?;

        match settings.api_base {
            Some(api_base) => Self::new(&api_base),
            None => Err(RestClientError::MissingBaseUrl),
        }
    }

    /// The base URL as configured, without trailing slashes
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the URL for a route under the base URL
    ///
    /// Each segment is appended as a single, percent-encoded path segment, so
    /// an opaque identifier can never change which route is addressed.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
