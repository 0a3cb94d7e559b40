//! Axum router wiring.
//!
//! `/counters/:name` for the four counter verbs, plus the operational
//! endpoints when `ops.enabled` is set.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let counter = transport::http::counter;
    let mut router = Router::new().route(
        "/counters/:name",
        get(counter).post(counter).put(counter).delete(counter),
    );

    if state.cfg().ops.enabled {
        router = router
            .route("/healthz", get(ops::healthz))
            .route("/readyz", get(ops::readyz))
            .route("/metrics", get(ops::metrics));
    }

    router.with_state(state)
}
