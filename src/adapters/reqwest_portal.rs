//! Reqwest-based portal API adapter.
//!
//! Implements [`PortalApi`] against the portal's JSON endpoints using a
//! `reqwest::Client`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;
use crate::models::{Application, Job};
use crate::traits::PortalApi;

/// Portal API implementation over HTTP.
///
/// # Example
///
/// ```ignore
/// use hiredeck::adapters::HttpPortalApi;
/// use hiredeck::traits::PortalApi;
///
/// let api = HttpPortalApi::new("https://portal.example.com").with_token("jwt");
/// let jobs = api.get_recruiter_jobs().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpPortalApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpPortalApi {
    /// Create an adapter for the given portal base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Use a custom `reqwest::Client` (timeouts, pools, TLS settings).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Convert a reqwest error to a [`FetchError`].
    fn convert_error(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Other(err.to_string())
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "portal GET");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(Self::convert_error)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(Self::convert_error)
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn get_recruiter_applications(&self) -> Result<Vec<Application>, FetchError> {
        self.get_json("/api/recruiter/applications").await
    }

    async fn get_recruiter_jobs(&self) -> Result<Vec<Job>, FetchError> {
        self.get_json("/api/recruiter/jobs").await
    }
}
