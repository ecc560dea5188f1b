#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{Name, Picture, UserRecord};
pub use ports::{FetchUsersError, FetchUsersResult, UserSourcePort};

