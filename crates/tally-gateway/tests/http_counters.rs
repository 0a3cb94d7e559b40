#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tally_gateway::{app_state::AppState, config, router};

fn app() -> (AppState, Router) {
    let state = AppState::new(config::TallyConfig::default()).expect("state");
    let router = router::build_router(state.clone());
    (state, router)
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn call_json(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, body) = call(app, method, uri).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

#[tokio::test]
async fn create_a_counter() {
    let (_, app) = app();
    let (status, body) = call_json(&app, "POST", "/counters/foo").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "foo": 0 }));
}

#[tokio::test]
async fn duplicate_a_counter() {
    let (_, app) = app();
    let (status, _) = call(&app, "POST", "/counters/bar").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call_json(&app, "POST", "/counters/bar").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "Message": "Counter bar already exists" }));
}

#[tokio::test]
async fn update_missing_counter() {
    let (_, app) = app();
    let (status, body) = call_json(&app, "PUT", "/counters/update").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Counter update not found" }));
}

#[tokio::test]
async fn update_a_counter() {
    let (_, app) = app();
    let (status, body) = call_json(&app, "POST", "/counters/update").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "update": 0 }));

    let (status, body) = call_json(&app, "GET", "/counters/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "update": 0 }));

    let (status, body) = call_json(&app, "PUT", "/counters/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "update": 1 }));

    let (status, body) = call_json(&app, "GET", "/counters/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "update": 1 }));
}

#[tokio::test]
async fn get_missing_counter() {
    let (_, app) = app();
    let (status, body) = call_json(&app, "GET", "/counters/null1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Counter null1 not found" }));
}

#[tokio::test]
async fn delete_a_counter() {
    let (state, app) = app();
    let (status, _) = call(&app, "POST", "/counters/delete").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, "DELETE", "/counters/delete").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = call(&app, "GET", "/counters/delete").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", "/counters/delete").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.registry().is_empty());

    let (status, body) = call_json(&app, "POST", "/counters/delete").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "delete": 0 }));
}

#[tokio::test]
async fn other_verbs_are_rejected() {
    let (_, app) = app();
    let (status, _) = call(&app, "PATCH", "/counters/foo").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_updates_through_router() {
    let (state, app) = app();
    call(&app, "POST", "/counters/hits").await;

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            call(&app, "PUT", "/counters/hits").await.0
        }));
    }
    for t in tasks {
        assert_eq!(t.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(state.registry().read("hits").unwrap(), 50);
}

#[tokio::test]
async fn ops_endpoints() {
    let (state, app) = app();
    call(&app, "POST", "/counters/foo").await;
    call(&app, "GET", "/counters/missing").await;

    let (status, body) = call(&app, "GET", "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = call(&app, "GET", "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("tally_requests_total{op=\"create\",status=\"201\"} 1"));
    assert!(text.contains("tally_requests_total{op=\"read\",status=\"404\"} 1"));
    assert!(text.contains("tally_counters_live 1"));

    let (status, _) = call(&app, "GET", "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    state.set_draining();
    let (status, body) = call(&app, "GET", "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, b"draining");
}

#[tokio::test]
async fn ops_endpoints_can_be_disabled() {
    let cfg = config::load_from_str("version: 1\nops:\n  enabled: false\n").unwrap();
    let app = router::build_router(AppState::new(cfg).unwrap());
    let (status, _) = call(&app, "GET", "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
