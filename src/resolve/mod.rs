//! Combined-path resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Request path (/app/js/a,b,../c.js)
//!     → extension.rs (detect .js/.json/.css suffix)
//!     → resolver.rs (strip prefix + suffix, split on commas,
//!                    fold relative segments against the previous
//!                    segment's directory)
//!     → Ordered list of absolute resource locations
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure function: no I/O, no shared state
//! - Output preserves first-occurrence order while eliminating
//!   duplicates, so merge order is deterministic
//! - Malformed paths are never rejected; they resolve best-effort
//!   against the root directory

pub mod extension;
pub mod resolver;

pub use extension::Extension;
pub use resolver::resolve;
