//! Error types for `randomuser.me` operations.
//!
//! These errors describe what went wrong inside the adapter. At the port
//! boundary they are logged and collapsed into `FetchUsersError`.

use thiserror::Error;

/// Result type alias for `randomuser.me` operations.
pub type RandomUserResult<T> = Result<T, RandomUserError>;

/// Errors related to `randomuser.me` API operations.
#[derive(Debug, Error)]
pub enum RandomUserError {
    /// API request failed with an HTTP error status.
    #[error("randomuser.me request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild {
        /// Reason reported by the HTTP library
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error, including a body that does not match the expected shape.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
