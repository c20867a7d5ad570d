//! HTTP host layer.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → combine handler (extension check, cache flags from query params)
//!     → merge orchestrator (core)
//!     → response (MIME, Cache-Control, X-Cache headers)
//! ```
//!
//! # Design Decisions
//! - The host parses request parameters; the core only ever sees the
//!   derived cache flags
//! - Paths without a recognized extension are answered 404 here; the
//!   resolver itself tolerates them

pub mod server;

pub use server::{AppState, HttpServer};
