//! Document-root filesystem fetcher.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{FetchError, ResourceFetcher};

/// Serves resources from a document root on disk.
///
/// Resolved locations are absolute paths like `/js/a.js`; they map to
/// files under `root`.
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a resolved location to an on-disk path. Resolver output is
    /// already normalized, so any remaining `..` is a crafted path and
    /// is treated as nonexistent.
    fn locate(&self, location: &str) -> Option<PathBuf> {
        if location.split('/').any(|segment| segment == "..") {
            return None;
        }
        Some(self.root.join(location.trim_start_matches('/')))
    }
}

impl ResourceFetcher for FsFetcher {
    fn fetch(&self, location: &str) -> Result<Option<String>, FetchError> {
        let Some(path) = self.locate(location) else {
            return Ok(None);
        };
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FetchError::Io {
                location: location.to_string(),
                source: e,
            }),
        }
    }
}
