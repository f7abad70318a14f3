//! Trait abstractions for external services.
//!
//! Traits here are the seams for dependency injection: production adapters
//! live in `crate::adapters`, tests substitute mocks.

pub mod auth_provider;
pub mod portal;

pub use auth_provider::{MultiSessionAuth, SessionAuth, UsernameAuth};
pub use portal::PortalApi;
