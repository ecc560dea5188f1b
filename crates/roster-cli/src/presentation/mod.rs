//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no fetching, no domain transforms.

pub mod tables;

pub use tables::{format_users_json, format_users_table, separator, truncate_string};
