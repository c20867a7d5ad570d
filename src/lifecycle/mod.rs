//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Shutdown is coordinated through a broadcast channel so the server
//!   task and any helpers observe the same signal
//! - Integration tests drive shutdown programmatically; production
//!   relies on Ctrl+C

pub mod shutdown;

pub use shutdown::Shutdown;
