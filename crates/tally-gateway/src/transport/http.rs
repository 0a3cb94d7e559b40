//! Counter request handler.
//!
//! Responsibilities:
//! - Resolve the `Op` from the request verb
//! - Dispatch to the registered counter service
//! - Translate the `Reply` (or error) into an HTTP response
//! - Record request/latency metrics

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::Instrument;

use tally_core::{Op, Reply};

use crate::app_state::AppState;

/// Wraps a core `Reply` so it can be returned from axum handlers.
pub struct HttpReply(pub Reply);

impl IntoResponse for HttpReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.0.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

pub async fn counter(
    State(state): State<AppState>,
    method: Method,
    Path(name): Path<String>,
) -> Response {
    let Some(op) = Op::from_verb(method.as_str()) else {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    };

    let span = tracing::info_span!("counter", op = op.as_str(), counter = %name);
    let reply = handle(&state, op, &name).instrument(span).await;
    HttpReply(reply).into_response()
}

async fn handle(state: &AppState, op: Op, name: &str) -> Reply {
    let metrics = state.metrics();
    let labels = [("op", op.as_str())];
    metrics.inflight.inc(&labels);
    let started = Instant::now();

    let reply = match state.dispatcher().dispatch(state.registry(), op, name).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(code = e.client_code().as_str(), error = %e, "counter request failed");
            Reply::from(e)
        }
    };

    metrics.dispatch_duration.observe(&labels, started.elapsed());
    metrics.inflight.dec(&labels);
    let status = reply.status.code().to_string();
    metrics.requests.inc(&[("op", op.as_str()), ("status", status.as_str())]);

    reply
}
