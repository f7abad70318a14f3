//! Auth client facade.
//!
//! Aggregates the provider's capabilities behind one handle. The facade
//! delegates without altering semantics; whatever the provider resolves is
//! what callers see.

use std::sync::Arc;

use tracing::debug;

use crate::auth::models::{AuthSession, SignInCredentials, SignUpData};
use crate::error::AuthError;
use crate::traits::{MultiSessionAuth, SessionAuth, UsernameAuth};

/// Facade over an auth provider composed of the session, username, and
/// multi-session capabilities.
///
/// # Example
///
/// ```ignore
/// use hiredeck::auth::{AuthClient, SignInCredentials};
///
/// let client = AuthClient::new(provider);
/// let session = client
///     .sign_in(SignInCredentials {
///         email: "r@example.com".into(),
///         password: "secret".into(),
///     })
///     .await?;
/// ```
pub struct AuthClient<P> {
    provider: Arc<P>,
}

impl<P> Clone for AuthClient<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P> AuthClient<P>
where
    P: SessionAuth + UsernameAuth + MultiSessionAuth,
{
    /// Compose the capabilities of `provider` into one client.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, credentials: SignInCredentials) -> Result<AuthSession, AuthError> {
        debug!(email = %credentials.email, "sign in");
        self.provider.sign_in(credentials).await
    }

    /// Sign in with username and password.
    pub async fn sign_in_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        debug!(%username, "sign in by username");
        self.provider.sign_in_username(username, password).await
    }

    /// Create an account and establish a session.
    pub async fn sign_up(&self, data: SignUpData) -> Result<AuthSession, AuthError> {
        debug!(email = %data.email, "sign up");
        self.provider.sign_up(data).await
    }

    /// End the active session.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await
    }

    /// The active session, if any.
    pub async fn session(&self) -> Result<Option<AuthSession>, AuthError> {
        self.provider.session().await
    }

    /// Every session belonging to the signed-in account.
    pub async fn list_sessions(&self) -> Result<Vec<AuthSession>, AuthError> {
        self.provider.list_sessions().await
    }

    /// Make the given session active.
    pub async fn activate_session(&self, session_token: &str) -> Result<AuthSession, AuthError> {
        self.provider.activate_session(session_token).await
    }

    /// Revoke the given session.
    pub async fn revoke_session(&self, session_token: &str) -> Result<(), AuthError> {
        self.provider.revoke_session(session_token).await
    }
}
