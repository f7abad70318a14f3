//! Keyed cache for asynchronous reads with in-flight de-duplication.
//!
//! One entry per [`QueryKey`]. A fetch against a key with no entry starts
//! exactly one underlying request; callers arriving while it is outstanding
//! join the same shared future. Resolved values are served from the cache
//! until invalidated. A failed fetch marks the entry errored instead of
//! evicting it, so the next fetch retries rather than returning stale data.
//!
//! Every started fetch carries a sequence id, and its completion only
//! settles the entry if that id is still the one registered under the key.
//! A fetch that was invalidated or replaced while outstanding still resolves
//! for its callers, but its result never lands in the map.
//!
//! All entry mutation happens behind one mutex with no await inside the
//! critical section.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::query::key::QueryKey;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, FetchError>>>;

enum Entry<V> {
    InFlight { id: u64, shared: SharedFetch<V> },
    Resolved(V),
    Errored(FetchError),
}

/// Reactive read surface for one cached query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryHandle<V> {
    /// The resolved collection, if any
    pub data: Option<V>,
    /// The error attached to the key, if the last fetch failed
    pub error: Option<FetchError>,
    /// Whether a fetch for the key is outstanding
    pub is_loading: bool,
}

impl<V> QueryHandle<V> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Handle for a key with no cache entry.
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
        }
    }

    pub(crate) fn from_result(result: Result<V, FetchError>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                error: None,
                is_loading: false,
            },
            Err(error) => Self {
                data: None,
                error: Some(error),
                is_loading: false,
            },
        }
    }

    pub(crate) fn loading() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
        }
    }
}

struct CacheInner<V> {
    entries: Mutex<HashMap<QueryKey, Entry<V>>>,
    /// Sequence ids for started fetches; write-backs check theirs is still
    /// the registered one.
    fetch_seq: AtomicU64,
}

/// Cache of query results keyed by [`QueryKey`].
///
/// Cloning is cheap and clones share the same entries.
pub struct QueryCache<V> {
    inner: Arc<CacheInner<V>>,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CacheInner {
                entries: Mutex::new(HashMap::new()),
                fetch_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Resolve `key`, running `load` at most once per outstanding request.
    ///
    /// - cache hit: returns the stored value, `load` is dropped unrun
    /// - in-flight: joins the existing request
    /// - miss or previously errored: starts a new request
    ///
    /// The underlying request is driven to completion on the runtime even if
    /// every caller stops awaiting, so a started fetch always settles the
    /// entry unless it was invalidated or replaced in the meantime.
    pub async fn fetch<F>(&self, key: QueryKey, load: F) -> Result<V, FetchError>
    where
        F: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let shared = {
            let mut entries = self.inner.entries.lock().expect("query cache lock poisoned");
            match entries.get(&key) {
                Some(Entry::Resolved(value)) => {
                    debug!(%key, "query cache hit");
                    return Ok(value.clone());
                }
                Some(Entry::InFlight { shared, .. }) => {
                    debug!(%key, "joining in-flight query");
                    shared.clone()
                }
                Some(Entry::Errored(_)) | None => {
                    debug!(%key, "query cache miss, starting fetch");
                    let id = self.inner.fetch_seq.fetch_add(1, Ordering::Relaxed);
                    let inner = Arc::clone(&self.inner);
                    let write_key = key.clone();
                    let shared = async move {
                        let result = load.await;
                        let mut entries =
                            inner.entries.lock().expect("query cache lock poisoned");
                        // Settle the entry only if this fetch is still the
                        // registered one; a stale completion after
                        // invalidation or replacement must not land.
                        let still_current = matches!(
                            entries.get(&write_key),
                            Some(Entry::InFlight { id: current, .. }) if *current == id
                        );
                        if still_current {
                            match &result {
                                Ok(value) => {
                                    entries.insert(write_key, Entry::Resolved(value.clone()));
                                }
                                Err(error) => {
                                    warn!(key = %write_key, %error, "query fetch failed");
                                    entries.insert(write_key, Entry::Errored(error.clone()));
                                }
                            }
                        } else {
                            debug!(key = %write_key, "discarding stale fetch result");
                        }
                        result
                    }
                    .boxed()
                    .shared();
                    entries.insert(
                        key.clone(),
                        Entry::InFlight {
                            id,
                            shared: shared.clone(),
                        },
                    );
                    // Keep the request alive independently of the callers.
                    drop(tokio::spawn(shared.clone()));
                    shared
                }
            }
        };

        shared.await
    }

    /// Resolved value for `key`, if present.
    pub fn get(&self, key: &QueryKey) -> Option<V> {
        let entries = self.inner.entries.lock().expect("query cache lock poisoned");
        match entries.get(key) {
            Some(Entry::Resolved(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Error attached to `key`, if the last fetch failed.
    pub fn error(&self, key: &QueryKey) -> Option<FetchError> {
        let entries = self.inner.entries.lock().expect("query cache lock poisoned");
        match entries.get(key) {
            Some(Entry::Errored(error)) => Some(error.clone()),
            _ => None,
        }
    }

    /// Whether any entry (in-flight, resolved, or errored) exists for `key`.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.inner
            .entries
            .lock()
            .expect("query cache lock poisoned")
            .contains_key(key)
    }

    /// Current handle for `key` without triggering a fetch.
    pub fn snapshot(&self, key: &QueryKey) -> QueryHandle<V> {
        let entries = self.inner.entries.lock().expect("query cache lock poisoned");
        match entries.get(key) {
            Some(Entry::InFlight { .. }) => QueryHandle::loading(),
            Some(Entry::Resolved(value)) => QueryHandle::from_result(Ok(value.clone())),
            Some(Entry::Errored(error)) => QueryHandle::from_result(Err(error.clone())),
            None => QueryHandle::empty(),
        }
    }

    /// Drop the entry for `key`. The next fetch starts fresh, and a fetch
    /// still outstanding for the dropped entry cannot write its result back.
    pub fn invalidate(&self, key: &QueryKey) {
        debug!(%key, "invalidating query");
        self.inner
            .entries
            .lock()
            .expect("query cache lock poisoned")
            .remove(key);
    }

    /// Drop every entry whose key starts with `prefix`. Invalidating a
    /// family root clears the whole family.
    pub fn invalidate_prefix(&self, prefix: &QueryKey) {
        debug!(%prefix, "invalidating query prefix");
        self.inner
            .entries
            .lock()
            .expect("query cache lock poisoned")
            .retain(|key, _| !key.starts_with(prefix));
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner
            .entries
            .lock()
            .expect("query cache lock poisoned")
            .clear();
    }
}
