//! Merged-response cache.

use dashmap::DashMap;
use std::sync::Arc;

use crate::observability::metrics;

/// A thread-safe cache of merged responses, keyed by the original
/// combined request path.
///
/// Cloning the handle shares the underlying map, so the cache can be
/// held by the HTTP state and every handler task at once. Each
/// operation is individually atomic; there is no cross-operation
/// transaction.
#[derive(Clone, Default)]
pub struct MergeCache {
    inner: Arc<DashMap<String, String>>,
}

impl MergeCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up previously merged content for a request path.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    /// Store merged content. An existing entry for the same key is
    /// replaced wholesale; concurrent writers race and the last wins.
    pub fn put(&self, key: String, value: String) {
        self.inner.insert(key, value);
        metrics::record_cache_size(self.inner.len());
    }

    /// Drop every entry. A put racing a clear may leave a single entry
    /// re-populated immediately afterwards; clear is a bulk-evict
    /// signal, not a barrier.
    pub fn clear(&self) {
        self.inner.clear();
        metrics::record_cache_size(0);
        tracing::info!("Merge cache cleared");
    }

    /// Number of cached responses.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
