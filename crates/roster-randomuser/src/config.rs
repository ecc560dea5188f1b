//! Public configuration for the `randomuser.me` client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

/// Default endpoint of the Random User API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

/// Configuration for the `randomuser.me` client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use roster_randomuser::RandomUserConfig;
///
/// let config = RandomUserConfig::new()
///     .with_base_url("http://127.0.0.1:8080/api/")
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct RandomUserConfig {
    /// Base URL of the users endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("roster-randomuser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RandomUserConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the users endpoint.
    ///
    /// Defaults to `https://randomuser.me/api/`. Any query string on the
    /// URL is replaced by the fixed request parameters.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
