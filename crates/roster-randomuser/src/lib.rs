#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultRandomUserClient is meant to be used through the UserSourcePort
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRandomUserClient;

// Configuration
pub use config::RandomUserConfig;

// Construction errors
pub use error::{RandomUserError, RandomUserResult};
