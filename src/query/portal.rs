//! Recruiter-facing read surface.
//!
//! Binds the list keys from the registry to the external fetch actions and
//! caches results per key. One portal instance is shared per client session.

use std::sync::Arc;

use crate::models::{Application, Job};
use crate::query::cache::{QueryCache, QueryHandle};
use crate::query::key::{QueryKey, ResourceFamily};
use crate::traits::PortalApi;

/// Cached reads of the recruiter's applications and jobs.
pub struct RecruiterPortal<A> {
    api: Arc<A>,
    applications: QueryCache<Vec<Application>>,
    jobs: QueryCache<Vec<Job>>,
}

impl<A> Clone for RecruiterPortal<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            applications: self.applications.clone(),
            jobs: self.jobs.clone(),
        }
    }
}

impl<A> RecruiterPortal<A>
where
    A: PortalApi + 'static,
{
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            applications: QueryCache::new(),
            jobs: QueryCache::new(),
        }
    }

    /// Read the recruiter's applications under the applications list key.
    ///
    /// Cache hit returns stored data without calling the server; concurrent
    /// callers share one in-flight request; failures come back on the handle
    /// as an error, never as a panic.
    pub async fn recruiter_applications(&self) -> QueryHandle<Vec<Application>> {
        let api = Arc::clone(&self.api);
        let result = self
            .applications
            .fetch(
                QueryKey::list(ResourceFamily::RecruiterApplications),
                async move { api.get_recruiter_applications().await },
            )
            .await;
        QueryHandle::from_result(result)
    }

    /// Read the recruiter's jobs under the jobs list key.
    pub async fn recruiter_jobs(&self) -> QueryHandle<Vec<Job>> {
        let api = Arc::clone(&self.api);
        let result = self
            .jobs
            .fetch(QueryKey::list(ResourceFamily::RecruiterJobs), async move {
                api.get_recruiter_jobs().await
            })
            .await;
        QueryHandle::from_result(result)
    }

    /// Current applications handle without triggering a fetch.
    pub fn applications_snapshot(&self) -> QueryHandle<Vec<Application>> {
        self.applications
            .snapshot(&QueryKey::list(ResourceFamily::RecruiterApplications))
    }

    /// Current jobs handle without triggering a fetch.
    pub fn jobs_snapshot(&self) -> QueryHandle<Vec<Job>> {
        self.jobs.snapshot(&QueryKey::list(ResourceFamily::RecruiterJobs))
    }

    /// Invalidate every applications entry (family root prefix).
    pub fn invalidate_applications(&self) {
        self.applications
            .invalidate_prefix(&QueryKey::all(ResourceFamily::RecruiterApplications));
    }

    /// Invalidate every jobs entry (family root prefix).
    pub fn invalidate_jobs(&self) {
        self.jobs
            .invalidate_prefix(&QueryKey::all(ResourceFamily::RecruiterJobs));
    }
}
