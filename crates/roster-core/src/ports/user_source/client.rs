//! User source port trait.

use super::error::FetchUsersResult;
use crate::domain::UserRecord;
use async_trait::async_trait;

/// Port trait for fetching user records.
///
/// # Design
///
/// - Uses core-owned `UserRecord`, not upstream API types
/// - Returns `FetchUsersError` for all failures
/// - One outbound request per call; implementations keep no cache
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSourcePort: Send + Sync {
    /// Fetch a fresh batch of users, in the order the upstream returned them.
    async fn fetch_users(&self) -> FetchUsersResult<Vec<UserRecord>>;
}
