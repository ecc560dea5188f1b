//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! transport or presentation concerns.

mod user;

pub use user::{Name, Picture, UserRecord};
