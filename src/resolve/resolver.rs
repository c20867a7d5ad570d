//! Resource-path resolution.
//!
//! # Responsibilities
//! - Strip the context prefix and extension from a combined request path
//! - Split the remaining segment list on commas
//! - Resolve each segment to an absolute resource location
//!
//! # Design Decisions
//! - A relative segment resolves against the directory of the previous
//!   segment's resolved location (left-to-right fold), not against a
//!   fixed base
//! - A relative segment seen before any absolute one resolves against
//!   the root directory; callers rely on this, it is not an error
//! - `..` normalization floors at the root rather than failing
//! - Duplicates collapse to the first occurrence; output order matches
//!   request order

use crate::resolve::extension::Extension;

/// Resolve a combined request path into an ordered, duplicate-free list
/// of absolute resource locations.
///
/// `context_prefix` is removed from the path (first occurrence only)
/// before the detected extension suffix is stripped and the remainder is
/// split on commas. The extension is re-appended to every resolved
/// location.
///
/// ```
/// use asset_combiner::resolve::resolve;
///
/// let locations = resolve("/app/js/a,b,c.js", "/app");
/// assert_eq!(locations, vec!["/js/a.js", "/js/b.js", "/js/c.js"]);
/// ```
pub fn resolve(request_path: &str, context_prefix: &str) -> Vec<String> {
    let suffix = Extension::detect(request_path)
        .map(|ext| ext.suffix())
        .unwrap_or("");

    let stripped = if context_prefix.is_empty() {
        request_path.to_string()
    } else {
        request_path.replacen(context_prefix, "", 1)
    };
    let bare = stripped.strip_suffix(suffix).unwrap_or(&stripped);

    let mut resolved: Vec<String> = Vec::new();
    let mut current_dir = String::from("/");

    for token in bare.split(',') {
        if token.is_empty() {
            continue;
        }
        let location = if token.starts_with('/') {
            format!("{}{}", normalize(token), suffix)
        } else {
            format!("{}{}", normalize(&join(&current_dir, token)), suffix)
        };
        // The next relative segment resolves against this location's
        // directory, even when the location itself is a duplicate.
        current_dir = parent_dir(&location).to_string();
        tracing::trace!(token = %token, location = %location, "Resolved segment");
        if !resolved.iter().any(|r| r == &location) {
            resolved.push(location);
        }
    }

    resolved
}

/// Append `segment` to `dir` with a single separator.
fn join(dir: &str, segment: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), segment)
}

/// Collapse `.`, `..` and empty segments. `..` at the root stays at the
/// root.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            seg => parts.push(seg),
        }
    }
    let mut out = String::from("/");
    out.push_str(&parts.join("/"));
    out
}

/// Directory portion of an absolute location; `/` for top-level entries.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_segments_share_directory() {
        let locations = resolve("/app/js/a,b,c.js", "/app");
        assert_eq!(locations, vec!["/js/a.js", "/js/b.js", "/js/c.js"]);
    }

    #[test]
    fn test_relative_segment_follows_previous_absolute() {
        // "./c" resolves against "/other" (directory of the segment just
        // before it), not against "/js".
        let locations = resolve("/app/js/a,/other/b,./c.js", "/app");
        assert_eq!(locations, vec!["/js/a.js", "/other/b.js", "/other/c.js"]);
    }

    #[test]
    fn test_parent_directory_walk() {
        let locations = resolve("/app/css/x,../y.css", "/app");
        assert_eq!(locations, vec!["/css/x.css", "/y.css"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let locations = resolve("/app/js/a,b,a.js", "/app");
        assert_eq!(locations, vec!["/js/a.js", "/js/b.js"]);
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let locations = resolve("/app/js/a,,b,.js", "/app");
        assert_eq!(locations, vec!["/js/a.js", "/js/b.js"]);
    }

    #[test]
    fn test_relative_before_any_absolute_resolves_against_root() {
        let locations = resolve("js/a,b.js", "");
        assert_eq!(locations, vec!["/js/a.js", "/js/b.js"]);
    }

    #[test]
    fn test_parent_walk_floors_at_root() {
        let locations = resolve("/a,../../b.js", "");
        assert_eq!(locations, vec!["/a.js", "/b.js"]);
    }

    #[test]
    fn test_context_prefix_removed_once() {
        let locations = resolve("/app/app/a.js", "/app");
        assert_eq!(locations, vec!["/app/a.js"]);
    }

    #[test]
    fn test_unrecognized_extension_passes_through() {
        let locations = resolve("/img/logo.png", "");
        assert_eq!(locations, vec!["/img/logo.png"]);
    }

    #[test]
    fn test_deep_relative_chain() {
        let locations = resolve("/app/js/libs/a,../vendor/b,./c.js", "/app");
        assert_eq!(
            locations,
            vec!["/js/libs/a.js", "/js/vendor/b.js", "/js/vendor/c.js"]
        );
    }
}
