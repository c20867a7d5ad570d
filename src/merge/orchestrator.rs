//! Merge orchestration.
//!
//! # Responsibilities
//! - Honor the clear signal before anything else
//! - Serve cache hits without resolving or fetching
//! - On miss, resolve the path, fetch every resource, concatenate in
//!   resolver order, and store the result
//!
//! # Design Decisions
//! - Missing resources contribute zero bytes and raise no error
//! - A failing read skips that resource and logs; the remaining
//!   resources still merge (partial content beats no content)
//! - Exactly one cache write per miss when caching is enabled

use crate::fetch::ResourceFetcher;
use crate::merge::cache::MergeCache;
use crate::observability::metrics;
use crate::resolve::resolver;

/// One combined request as seen by the core. The host derives the cache
/// flags from its own configuration and request parameters.
#[derive(Debug)]
pub struct MergeRequest<'a> {
    /// Original URL path, used verbatim as the cache key.
    pub request_path: &'a str,
    /// Prefix stripped from the path before resolution.
    pub context_prefix: &'a str,
    /// Whether this request may read and write the cache.
    pub cache_enabled: bool,
    /// Whether to drop every cache entry before serving.
    pub clear_cache: bool,
}

/// Outcome of serving one combined request.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Concatenated content of every resolved resource, in order.
    pub content: String,
    /// True when the content came straight from the cache.
    pub cache_hit: bool,
    /// Number of resolved resource locations (zero on a cache hit,
    /// where resolution is skipped entirely).
    pub resources: usize,
}

/// Serve a combined request: cache lookup, then resolve-fetch-merge on a
/// miss.
pub fn serve(
    cache: &MergeCache,
    fetcher: &dyn ResourceFetcher,
    request: &MergeRequest<'_>,
) -> MergeOutcome {
    if request.clear_cache {
        cache.clear();
    }

    if request.cache_enabled {
        if let Some(content) = cache.get(request.request_path) {
            tracing::debug!(path = %request.request_path, "Cache hit");
            metrics::record_cache_hit();
            return MergeOutcome {
                content,
                cache_hit: true,
                resources: 0,
            };
        }
        tracing::debug!(path = %request.request_path, "Cache miss");
        metrics::record_cache_miss();
    }

    let locations = resolver::resolve(request.request_path, request.context_prefix);
    let mut content = String::new();

    for location in &locations {
        match fetcher.fetch(location) {
            Ok(Some(body)) => content.push_str(&body),
            Ok(None) => {
                tracing::debug!(location = %location, "Resource absent, skipping");
            }
            Err(e) => {
                tracing::warn!(location = %location, error = %e, "Failed to read resource");
            }
        }
    }
    metrics::record_resources_merged(locations.len());

    if request.cache_enabled {
        cache.put(request.request_path.to_string(), content.clone());
    }

    MergeOutcome {
        content,
        cache_hit: false,
        resources: locations.len(),
    }
}
