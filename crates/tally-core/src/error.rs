//! Shared error type across tally crates.

use thiserror::Error;

use crate::protocol::Status;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Counter name already taken.
    AlreadyExists,
    /// No counter with that name.
    NotFound,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::AlreadyExists => "ALREADY_EXISTS",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and gateway.
///
/// The `Display` text of `AlreadyExists` and `NotFound` is the exact message
/// returned to HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("Counter {0} already exists")]
    AlreadyExists(String),
    #[error("Counter {0} not found")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::AlreadyExists(_) => ClientCode::AlreadyExists,
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Response status for this error.
    pub fn status(&self) -> Status {
        match self {
            TallyError::AlreadyExists(_) => Status::Conflict,
            TallyError::NotFound(_) => Status::NotFound,
            TallyError::BadRequest(_) | TallyError::UnsupportedVersion => Status::BadRequest,
            TallyError::Internal(_) => Status::Internal,
        }
    }
}
