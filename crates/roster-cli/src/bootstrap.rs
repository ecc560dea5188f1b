//! CLI composition root.
//!
//! Builds the concrete user source once and hands handlers a context that
//! exposes it only through the core port.

use std::sync::Arc;

use anyhow::{Context, Result};
use roster_core::UserSourcePort;
use roster_randomuser::{DefaultRandomUserClient, RandomUserConfig};

/// Configuration gathered from flags and environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Replacement for the default `https://randomuser.me/api/` endpoint.
    pub base_url: Option<String>,
}

/// Dependencies available to command handlers.
pub struct CliContext {
    users: Arc<dyn UserSourcePort>,
}

impl CliContext {
    /// Wrap an already-built user source.
    pub fn new(users: Arc<dyn UserSourcePort>) -> Self {
        Self { users }
    }

    /// The user source.
    pub fn users(&self) -> &dyn UserSourcePort {
        self.users.as_ref()
    }
}

/// Wire up the production user source.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let mut client_config = RandomUserConfig::new();
    if let Some(url) = &config.base_url {
        tracing::debug!(base_url = %url, "overriding Random User API endpoint");
        client_config = client_config.with_base_url(url.clone());
    }

    let client = DefaultRandomUserClient::new(&client_config)
        .context("failed to set up the Random User API client")?;

    Ok(CliContext::new(Arc::new(client)))
}
