//! Fetch-action trait for recruiter portal data.
//!
//! These are the server actions the query layer invokes. They resolve with
//! data or fail with a [`FetchError`]; they never touch the client cache
//! themselves.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{Application, Job};

/// Server fetch actions for the recruiter portal.
///
/// Implementations include the production HTTP adapter
/// (`crate::adapters::HttpPortalApi`) and mock clients in tests.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Fetch the recruiter's applications.
    async fn get_recruiter_applications(&self) -> Result<Vec<Application>, FetchError>;

    /// Fetch the recruiter's job postings.
    async fn get_recruiter_jobs(&self) -> Result<Vec<Job>, FetchError>;
}

#[async_trait]
impl<T: PortalApi + ?Sized> PortalApi for std::sync::Arc<T> {
    async fn get_recruiter_applications(&self) -> Result<Vec<Application>, FetchError> {
        self.as_ref().get_recruiter_applications().await
    }

    async fn get_recruiter_jobs(&self) -> Result<Vec<Job>, FetchError> {
        self.as_ref().get_recruiter_jobs().await
    }
}
