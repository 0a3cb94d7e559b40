//! tally gateway library entry.
//!
//! Wires config, the counter registry, the dispatcher and its services, the
//! HTTP transport, and operational endpoints into one axum application. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod transport;
