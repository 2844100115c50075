//! End-to-end tests for the /generate boundary.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; providers
//! are the library's mocks, so no network is involved.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use generation::{Generator, IndustryRegistry, MockContentProvider, MockImageProvider};
use server_core::app::{build_app, AppState};

fn app_with(generator: Generator, provider_configured: bool, images_configured: bool) -> Router {
    build_app(AppState::new(
        Arc::new(generator),
        provider_configured,
        images_configured,
    ))
}

fn template_only_app() -> Router {
    app_with(
        Generator::new(Arc::new(IndustryRegistry::builtin())),
        false,
        false,
    )
}

async fn post_generate(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

const BELLA_VISTA: &str = r#"{
    "websiteName": "Bella Vista",
    "industry": "restaurant",
    "description": "An Italian restaurant",
    "style": "modern"
}"#;

#[tokio::test]
async fn restaurant_request_succeeds_with_template_fallback() {
    let (status, body) = post_generate(template_only_app(), BELLA_VISTA).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["metadata"]["aiUsed"], "template-fallback");
    assert_eq!(body["debug"]["aiUsed"], "template-fallback");

    let sections = body["data"]["sections"].as_array().unwrap();
    assert!(sections.iter().any(|s| s["type"] == "menu"));
    assert_eq!(sections.first().unwrap()["type"], "header");
    assert_eq!(sections.last().unwrap()["type"], "footer");
    assert_eq!(
        body["debug"]["componentsGenerated"].as_u64().unwrap() as usize,
        sections.len()
    );

    // Colors equal the restaurant/modern palette.
    let registry = IndustryRegistry::builtin();
    let expected = serde_json::to_value(registry.palette("restaurant", "modern")).unwrap();
    assert_eq!(body["data"]["colors"], expected);
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let (status, body) = post_generate(template_only_app(), "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No data provided in request body");
}

#[tokio::test]
async fn trailing_comma_body_is_repaired() {
    let body_with_comma = r#"{
        "websiteName": "Bella Vista",
        "industry": "restaurant",
        "description": "An Italian restaurant",
    }"#;
    let (status, body) = post_generate(template_only_app(), body_with_comma).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn unparseable_body_returns_debug_info() {
    let (status, body) = post_generate(template_only_app(), "{\"a\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["debug"]["originalError"].as_str().unwrap().len() > 0);
    assert_eq!(body["debug"]["bodyContent"], "{\"a\": ");
}

#[tokio::test]
async fn missing_required_fields_echo_the_received_body() {
    let (status, body) =
        post_generate(template_only_app(), r#"{"websiteName": "Bella Vista"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["received"]["websiteName"], "Bella Vista");
}

#[tokio::test]
async fn blank_required_field_is_rejected() {
    let blank = r#"{"websiteName": "  ", "industry": "restaurant", "description": "x"}"#;
    let (status, body) = post_generate(template_only_app(), blank).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("websiteName"));
}

#[tokio::test]
async fn unavailable_provider_still_succeeds_via_fallback() {
    let generator = Generator::new(Arc::new(IndustryRegistry::builtin()))
        .with_provider(Arc::new(MockContentProvider::unavailable()));
    let app = app_with(generator, true, false);

    let request = r#"{
        "websiteName": "Bella Vista",
        "industry": "restaurant",
        "description": "An Italian restaurant",
        "aiProvider": "ollama"
    }"#;
    let (status, body) = post_generate(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["metadata"]["aiUsed"], "template-fallback");
}

#[tokio::test]
async fn images_are_included_when_requested() {
    let images = MockImageProvider::new().with_urls(&[
        "https://img.example/a.jpg",
        "https://img.example/b.jpg",
    ]);
    let generator = Generator::new(Arc::new(IndustryRegistry::builtin()))
        .with_image_provider(Arc::new(images));
    let app = app_with(generator, false, true);

    let request = r#"{
        "websiteName": "Bella Vista",
        "industry": "restaurant",
        "description": "An Italian restaurant",
        "includeImages": true
    }"#;
    let (status, body) = post_generate(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["debug"]["imagesIncluded"], true);
    let rendered = body["data"].to_string();
    assert!(!rendered.contains("placeholder://"));
}

#[tokio::test]
async fn health_reports_provider_configuration() {
    let app = template_only_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["contentProvider"]["configured"], false);
}
