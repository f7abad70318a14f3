//! Error types for the Hiredeck client core.
//!
//! Errors are domain-scoped: fetch errors surface through cached query
//! results as values, config errors are fatal at startup, auth errors come
//! back from the provider facade. `FetchError` is `Clone` because a single
//! failed fetch can be observed by every caller joined on the same in-flight
//! request, and because errored cache entries retain the error until retried.

use thiserror::Error;

/// Errors produced while fetching server data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Other fetch failure
    #[error("Fetch failed: {0}")]
    Other(String),
}

/// Errors raised while loading environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required configuration: {0}")]
    MissingRequired(&'static str),
}

/// Errors returned by the auth provider facade.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Credentials were rejected by the provider
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No active session exists
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The referenced session does not exist
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    /// Provider-side failure
    #[error("Auth provider error: {0}")]
    Provider(String),
}
