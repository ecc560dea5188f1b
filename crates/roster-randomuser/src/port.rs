//! Port trait implementation for `RandomUserClient`.
//!
//! This is the fetch boundary: every internal failure is logged with its
//! cause here and then handed to the caller as `FetchUsersError`.

use async_trait::async_trait;
use roster_core::{FetchUsersError, FetchUsersResult, UserRecord, UserSourcePort};
use tracing::error;

use crate::client::RandomUserClient;
use crate::error::RandomUserError;
use crate::http::HttpBackend;

/// Log an internal error and collapse it into the port error.
fn map_error(err: RandomUserError) -> FetchUsersError {
    error!(error = %err, "Error fetching users");
    FetchUsersError::new(err)
}

#[async_trait]
impl<B: HttpBackend> UserSourcePort for RandomUserClient<B> {
    async fn fetch_users(&self) -> FetchUsersResult<Vec<UserRecord>> {
        self.list_users().await.map_err(map_error)
    }
}
