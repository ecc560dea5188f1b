//! Error type for user source port operations.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The single failure a user source reports to its callers.
///
/// Every underlying cause (connection failure, non-2xx status, malformed
/// body) collapses into this one kind. The message is always
/// `Failed to fetch users`; the original cause stays reachable through
/// [`std::error::Error::source`] for diagnostics.
#[derive(Debug, Error)]
#[error("Failed to fetch users")]
pub struct FetchUsersError {
    #[source]
    source: BoxError,
}

impl FetchUsersError {
    /// Wrap an underlying cause.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Result type alias for user source operations.
pub type FetchUsersResult<T> = Result<T, FetchUsersError>;
