//! URL construction for the Random User API.

use crate::models::ApiConfig;
use url::Url;

/// Number of users requested per call.
pub const RESULT_COUNT: u32 = 20;

/// Fields the API is asked to include in each result.
const INCLUDED_FIELDS: &[&str] = &["name", "picture", "email"];

/// Build the `inc` parameter value (comma separated, left unescaped).
fn build_inc_param() -> String {
    INCLUDED_FIELDS.join(",")
}

/// Build the users URL: the configured base with the fixed query.
///
/// Any query present on the base URL is replaced.
pub fn build_users_url(config: &ApiConfig) -> Url {
    let mut url = config.base_url.clone();
    url.set_query(Some(&format!(
        "results={RESULT_COUNT}&inc={}",
        build_inc_param()
    )));
    url
}
