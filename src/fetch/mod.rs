//! Resource lookup boundary.
//!
//! # Responsibilities
//! - Define the lookup contract the merge orchestrator consumes
//! - Distinguish absence (normal, tolerated) from read failure
//!
//! # Design Decisions
//! - Absence is `Ok(None)`, never an error; missing resources simply
//!   contribute nothing to the merged response
//! - Read failures are surfaced as [`FetchError`] so the caller can log
//!   them while the remaining resources still merge

use thiserror::Error;

pub mod fs;

pub use fs::FsFetcher;

/// Error reading a resource that exists but could not be read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lookup of one resolved resource location.
///
/// Implementations are injected into the merge orchestrator; the core
/// never decides where bytes come from.
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the content of `location`. `Ok(None)` means the resource
    /// does not exist.
    fn fetch(&self, location: &str) -> Result<Option<String>, FetchError>;
}
