// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for GET /health and the cross-origin policy

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::common::{app_with_engine, send, StubEngine};

#[tokio::test]
async fn test_health_reports_model_and_labels() {
    let app = app_with_engine(Arc::new(StubEngine::new([1.0, 0.0, 0.0, 0.0])));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["modelInput"], "input");
    assert_eq!(
        body["labels"],
        serde_json::json!(["Normal", "Pneumonia", "Covid", "Other"])
    );
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_any_origin_is_allowed() {
    let app = app_with_engine(Arc::new(StubEngine::new([1.0, 0.0, 0.0, 0.0])));

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_preflight_for_predict_succeeds() {
    let app = app_with_engine(Arc::new(StubEngine::new([1.0, 0.0, 0.0, 0.0])));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/predict")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
