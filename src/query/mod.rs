//! Cached server-data reads.
//!
//! Three pieces:
//!
//! - [`key`]: deterministic, hierarchical cache keys per resource family
//! - [`cache`]: the keyed cache with in-flight request de-duplication
//! - [`portal`]: the recruiter-facing read surface binding keys to the
//!   external fetch actions
//!
//! A read resolves its key from the registry, fetches through the cache, and
//! leaves the result stored under the key until it is invalidated. Concurrent
//! reads of the same key share one in-flight request.

pub mod cache;
pub mod key;
pub mod portal;

pub use cache::{QueryCache, QueryHandle};
pub use key::{QueryKey, ResourceFamily};
pub use portal::RecruiterPortal;
