//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - Log level configurable via `RUST_LOG`

pub mod logging;
