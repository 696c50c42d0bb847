//! # Query Cache
//!
//! Keyed cache of decoded responses shared by the query hooks and the
//! session. Values are stored type-erased; a read with the wrong type is a
//! miss.
//!
//! ## Staleness
//! An entry is fresh while it is younger than the caller's `stale_time` and
//! has not been invalidated. Invalidated entries stay readable through
//! [`QueryCache::get`] until replaced, so views can keep showing old data
//! while the refetch is in flight.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use super::key::QueryKey;
use super::options::QueryOptions;
use crate::core::Result;

struct CachedEntry {
    value: Arc<dyn Any + Send + Sync>,
    updated_at: Instant,
    invalidated: bool,
}

#[derive(Default)]
struct Inner {
    entries: RwLock<HashMap<QueryKey, CachedEntry>>,
    in_flight: Mutex<HashMap<QueryKey, usize>>,
}

/// Shared query cache. Clones observe the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `key`, calling `fetcher` only when no fresh value is cached.
    ///
    /// Returns `Ok(None)` for a disabled query. Failures are retried up to
    /// `options.retry` times with exponential backoff; the last error is
    /// returned and any previous value stays cached.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        mut fetcher: F,
    ) -> Result<Option<T>>
    where
        T: Clone + Send + Sync + 'static,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !options.enabled {
            return Ok(None);
        }

        if let Some(value) = self.fresh::<T>(key, options) {
            debug!(key = %key, "Query cache hit");
            return Ok(Some(value));
        }

        let _fetching = FetchGuard::new(&self.inner, key);
        let mut attempt = 0;
        loop {
            match fetcher().await {
                Ok(value) => {
                    self.set(key, value.clone());
                    return Ok(Some(value));
                }
                Err(err) if attempt < options.retry => {
                    let delay = options.backoff(attempt);
                    warn!(key = %key, attempt = attempt + 1, error = %err, "Query failed, retrying in {:?}", delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "Query failed");
                    return Err(err);
                }
            }
        }
    }

    fn fresh<T: Clone + 'static>(&self, key: &QueryKey, options: &QueryOptions) -> Option<T> {
        let entries = self.inner.entries.read();
        let entry = entries.get(key)?;
        if entry.invalidated || entry.updated_at.elapsed() >= options.stale_time {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Cached value regardless of staleness.
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.inner
            .entries
            .read()
            .get(key)
            .and_then(|entry| entry.value.downcast_ref::<T>().cloned())
    }

    pub fn set<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        self.inner.entries.write().insert(
            key.clone(),
            CachedEntry {
                value: Arc::new(value),
                updated_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.inner.entries.write();
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        debug!(prefix = %prefix, marked, "Invalidated queries");
        marked
    }

    /// Drop every entry under `prefix`.
    pub fn remove(&self, prefix: &QueryKey) {
        self.inner
            .entries
            .write()
            .retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&self) {
        self.inner.entries.write().clear();
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner.in_flight.lock().get(key).is_some_and(|count| *count > 0)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counts a fetch as in flight until dropped.
struct FetchGuard<'a> {
    inner: &'a Inner,
    key: QueryKey,
}

impl<'a> FetchGuard<'a> {
    fn new(inner: &'a Inner, key: &QueryKey) -> Self {
        *inner.in_flight.lock().entry(key.clone()).or_insert(0) += 1;
        Self {
            inner,
            key: key.clone(),
        }
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.inner.in_flight.lock();
        if let Some(count) = in_flight.get_mut(&self.key) {
            *count -= 1;
            if *count == 0 {
                in_flight.remove(&self.key);
            }
        }
    }
}
