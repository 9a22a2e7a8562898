//! Tests driving the complete router.
//!
//! Requests go through routing, extractors, controllers and error responses
//! exactly as they would when served, using `tower::ServiceExt::oneshot`.

mod catalog;
mod docs;
mod favorite;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use holonet::server::router::{self, App};
use holonet_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::json_body;

/// Builds the application router on top of the test database.
fn app(test: &TestContext) -> App {
    router::app(test.to_app_state())
}

/// Sends a request, returning the status and the JSON body.
async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    (resp.status(), json_body(resp).await)
}
