//! Auth provider capability traits.
//!
//! The external auth service is modeled as a set of capability interfaces
//! composed at construction time by [`crate::auth::AuthClient`]. Protocol
//! internals (tokens, transport, refresh) stay behind these traits.

use async_trait::async_trait;

use crate::auth::{AuthSession, SignInCredentials, SignUpData};
use crate::error::AuthError;

/// Core session operations: sign-in, sign-up, sign-out, current session.
#[async_trait]
pub trait SessionAuth: Send + Sync {
    /// Sign in with email and password, establishing a session.
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<AuthSession, AuthError>;

    /// Create an account and establish a session.
    async fn sign_up(&self, data: SignUpData) -> Result<AuthSession, AuthError>;

    /// End the active session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The active session, if any.
    async fn session(&self) -> Result<Option<AuthSession>, AuthError>;
}

/// Username capability: sign-in by username instead of email.
#[async_trait]
pub trait UsernameAuth: Send + Sync {
    async fn sign_in_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError>;
}

/// Multi-session capability: several concurrent device sessions per account.
#[async_trait]
pub trait MultiSessionAuth: Send + Sync {
    /// Every session belonging to the signed-in account.
    async fn list_sessions(&self) -> Result<Vec<AuthSession>, AuthError>;

    /// Make the given session the active one.
    async fn activate_session(&self, session_token: &str) -> Result<AuthSession, AuthError>;

    /// Revoke the given session.
    async fn revoke_session(&self, session_token: &str) -> Result<(), AuthError>;
}
