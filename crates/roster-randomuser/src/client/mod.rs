//! `randomuser.me` client.
//!
//! This module provides the client type that the port implementation
//! drives. It is generic over the HTTP backend so tests can swap in a fake.

mod users;

use crate::config::RandomUserConfig;
use crate::error::RandomUserResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default `randomuser.me` client using the reqwest HTTP backend.
pub type DefaultRandomUserClient = RandomUserClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Random User API.
///
/// Holds no mutable state: concurrent calls issue independent requests.
/// Use `DefaultRandomUserClient` in production code.
pub struct RandomUserClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultRandomUserClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &RandomUserConfig) -> RandomUserResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> RandomUserResult<Self> {
        Self::new(&RandomUserConfig::default())
    }

    fn to_internal_config(config: &RandomUserConfig) -> RandomUserResult<ApiConfig> {
        Ok(ApiConfig {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl<B: HttpBackend> RandomUserClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
