//! Users endpoint for the `randomuser.me` client.

use roster_core::UserRecord;
use tracing::debug;

use crate::error::RandomUserResult;
use crate::http::HttpBackend;
use crate::models::UsersResponse;
use crate::url::build_users_url;

use super::RandomUserClient;

impl<B: HttpBackend> RandomUserClient<B> {
    /// Fetch one batch of users.
    ///
    /// Issues exactly one request and returns `results` unchanged.
    pub(crate) async fn list_users(&self) -> RandomUserResult<Vec<UserRecord>> {
        let url = build_users_url(&self.config);
        let response: UsersResponse = self.backend.get_json(&url).await?;

        debug!(count = response.results.len(), "fetched users");
        Ok(response.results)
    }
}
