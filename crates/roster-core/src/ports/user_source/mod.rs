//! User source port definitions.
//!
//! This module defines the port trait and error for fetching user records.
//! The `randomuser.me` implementation lives in `roster-randomuser`.

mod client;
mod error;

pub use client::UserSourcePort;
pub use error::{FetchUsersError, FetchUsersResult};
