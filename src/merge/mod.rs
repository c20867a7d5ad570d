//! Merge subsystem: response cache and orchestration.
//!
//! # Data Flow
//! ```text
//! Request path + cache flags
//!     → orchestrator.rs (clear signal, cache lookup)
//!     → cache hit: return stored content
//!     → cache miss: resolve → fetch each resource → concatenate
//!     → cache.rs (store merged content, keyed by raw request path)
//! ```
//!
//! # Design Decisions
//! - Cache key is the full original request path, used verbatim
//! - Entries are whole merged responses, overwritten wholesale
//! - No eviction, no TTL, no size bound; clear() is the only evictor
//! - The get-then-put miss path is not atomic: two concurrent misses
//!   for the same key both recompute and the last write wins. Redundant
//!   work, never corruption.

pub mod cache;
pub mod orchestrator;

pub use cache::MergeCache;
pub use orchestrator::{serve, MergeOutcome, MergeRequest};
