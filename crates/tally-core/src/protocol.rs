//! Request/reply contract between the transport and the registry.
//!
//! - `Op`: which counter operation a request names (derived from the verb)
//! - `Status`: transport-neutral outcome code
//! - `Reply`: status plus optional JSON body, ready for any HTTP stack

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::TallyError;

/// Counter operation selected by the request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Update,
    Read,
    Delete,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Create, Op::Update, Op::Read, Op::Delete];

    /// Parse from an HTTP verb (`POST`, `PUT`, `GET`, `DELETE`).
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "POST" => Some(Op::Create),
            "PUT" => Some(Op::Update),
            "GET" => Some(Op::Read),
            "DELETE" => Some(Op::Delete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Create => "create",
            Op::Update => "update",
            Op::Read => "read",
            Op::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Created,
    NoContent,
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::NoContent => 204,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::Conflict => 409,
            Status::Internal => 500,
        }
    }
}

/// Error body: `{"Message": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "Message")]
    message: &'a str,
}

/// Transport-agnostic response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: Status,
    pub body: Option<Value>,
}

impl Reply {
    /// `{name: value}` with the given status.
    pub fn counter(status: Status, name: &str, value: u64) -> Self {
        let mut obj = Map::with_capacity(1);
        obj.insert(name.to_string(), Value::from(value));
        Self {
            status,
            body: Some(Value::Object(obj)),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: Status::NoContent,
            body: None,
        }
    }

    pub fn error(err: &TallyError) -> Self {
        let message = err.to_string();
        let body = serde_json::to_value(ErrorBody { message: &message }).ok();
        Self {
            status: err.status(),
            body,
        }
    }
}

impl From<TallyError> for Reply {
    fn from(err: TallyError) -> Self {
        Reply::error(&err)
    }
}
