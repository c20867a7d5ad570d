//! Combined static asset service library.
//!
//! Serves multiple JS, JSON or CSS resources as a single HTTP response,
//! addressed by a comma-combined path like `/js/a,b,../lib/c.js`.

pub mod admin;
pub mod config;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod merge;
pub mod observability;
pub mod resolve;

pub use config::CombinerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
