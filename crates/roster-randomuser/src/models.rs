//! Internal API types for the Random User API.
//!
//! These types are internal to `roster-randomuser`. Consumers see only the
//! core `UserRecord`.

use roster_core::UserRecord;
use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the client, with the base URL already parsed.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the users endpoint
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Body of a successful `GET /api/` response.
///
/// The API also returns an `info` block (seed, page, version) which is
/// ignored. A body without `results` fails to decode.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    /// The generated users, in API order
    pub results: Vec<UserRecord>,
}
