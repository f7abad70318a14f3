//! Authentication facade for the Hiredeck client.
//!
//! This module provides:
//! - Session models exchanged with the auth provider
//! - [`AuthClient`]: a thin facade aggregating the provider capabilities
//!   (sessions, username sign-in, multi-session) at construction time
//!
//! Protocol internals are delegated to the provider behind the capability
//! traits in `crate::traits::auth_provider`.

pub mod client;
pub mod models;

pub use client::AuthClient;
pub use models::{AuthSession, AuthUser, SignInCredentials, SignUpData};
