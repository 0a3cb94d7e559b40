//! tally core: transport-agnostic counter registry, protocol types, and errors.
//!
//! This crate owns the counter state and the reply contract shared by the
//! gateway and its tests. It carries no transport or runtime dependencies so
//! the registry can be driven directly from threads, tests, or any server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod registry;

/// Shared result type.
pub use error::{Result, TallyError};
pub use protocol::{Op, Reply, Status};
pub use registry::CounterRegistry;
