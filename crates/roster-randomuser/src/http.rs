//! HTTP backend abstraction for the Random User API.
//!
//! This module provides a trait-based HTTP backend so the client can be
//! exercised without the network. The production implementation uses
//! reqwest and makes exactly one attempt per call.

use crate::error::{RandomUserError, RandomUserResult};
use crate::models::ApiConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `UserSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RandomUserResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Non-2xx statuses are turned into `ApiRequestFailed`; the body is decoded
/// with `serde_json` so shape mismatches surface as `JsonParse`.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    ///
    /// The client keeps reqwest's default timeouts.
    pub fn new(config: &ApiConfig) -> RandomUserResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RandomUserError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RandomUserResult<T> {
        debug!(%url, "sending request");

        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RandomUserError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "received response");

        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
