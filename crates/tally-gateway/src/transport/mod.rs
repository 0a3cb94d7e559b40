//! HTTP transport modules.
//!
//! `http`: `/counters/{name}` handler and `Reply` -> axum response conversion.

pub mod http;
