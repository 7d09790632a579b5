// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the HTTP surface over SQLite storage.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use folio_contact::ContactService;
use folio_gateway::{GatewayState, router};
use folio_test_utils::{MemoryStore, MockNotifier, TestHarness, valid_submission};

#[tokio::test]
async fn submit_then_list_shows_newest_record() {
    let harness = TestHarness::new().await.unwrap();

    let (status, body) = harness.submit(&valid_submission()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you! Your message has been received. I'll get back to you soon!"
    );
    assert_eq!(body["data"]["name"], "Jo Doe");
    assert_eq!(body["data"]["email"], "jo@example.com");
    assert_eq!(body["data"]["subject"], "Hi");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, list) = harness.list().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["success"], true);
    assert!(list["count"].as_u64().unwrap() >= 1);
    let newest = &list["data"][0];
    assert_eq!(newest["id"], id.as_str());
    assert_eq!(newest["name"], "Jo Doe");
    assert_eq!(newest["status"], "new");
    assert!(newest["createdAt"].is_string());
    assert!(newest["updatedAt"].is_string());
}

#[tokio::test]
async fn email_is_stored_trimmed_and_lowercased() {
    let harness = TestHarness::new().await.unwrap();
    let mut body = valid_submission();
    body["email"] = json!("  Jo.Doe@Example.COM ");

    let (status, created) = harness.submit(&body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["email"], "jo.doe@example.com");
}

#[tokio::test]
async fn validation_failure_returns_400_and_stores_nothing() {
    let harness = TestHarness::new().await.unwrap();
    let mut body = valid_submission();
    body["message"] = json!("short");
    body["name"] = json!("J");

    let (status, err) = harness.submit(&body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["success"], false);
    assert_eq!(err["message"], "Name must be at least 2 characters");
    assert_eq!(err["errors"].as_array().unwrap().len(), 2);

    assert_eq!(harness.storage.count().await.unwrap(), 0);
    assert_eq!(harness.notifier.call_count().await, 0);
}

#[tokio::test]
async fn missing_field_returns_400() {
    let harness = TestHarness::new().await.unwrap();
    let (status, err) = harness
        .submit(&json!({ "name": "Jo Doe", "email": "jo@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Please provide all required fields");
    assert!(err.get("errors").is_none());
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let harness = TestHarness::new().await.unwrap();
    let (status, err) = harness
        .request(
            Method::POST,
            "/api/contact",
            Some(Body::from("{\"name\": \"Jo")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["success"], false);
    assert_eq!(err["message"], "Invalid request body");
}

#[tokio::test]
async fn urlencoded_submission_is_accepted() {
    let harness = TestHarness::new().await.unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "name=Jo+Doe&email=Jo%40Example.com&subject=Hi&message=This+is+a+test+message.",
        ))
        .unwrap();
    let response = harness.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, list) = harness.list().await;
    assert_eq!(list["data"][0]["name"], "Jo Doe");
    assert_eq!(list["data"][0]["email"], "jo@example.com");
    assert_eq!(list["data"][0]["message"], "This is a test message.");
}

#[tokio::test]
async fn failing_notifier_still_returns_201() {
    let harness = TestHarness::builder()
        .with_notifier(MockNotifier::failing())
        .build()
        .await
        .unwrap();

    let (status, _) = harness.submit(&valid_submission()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(harness.storage.count().await.unwrap(), 1);
    assert_eq!(harness.notifier.call_count().await, 2);
}

#[tokio::test]
async fn not_ready_notifier_is_never_called() {
    let harness = TestHarness::builder()
        .with_notifier(MockNotifier::not_ready())
        .build()
        .await
        .unwrap();

    let (status, _) = harness.submit(&valid_submission()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(harness.notifier.call_count().await, 0);
}

#[tokio::test]
async fn delete_then_delete_again() {
    let harness = TestHarness::new().await.unwrap();
    let (_, created) = harness.submit(&valid_submission()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = harness.delete(&id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message deleted successfully");

    let (_, list) = harness.list().await;
    assert_eq!(list["count"], 0);

    let (status, body) = harness.delete(&id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Message not found");
}

#[tokio::test]
async fn listing_returns_at_most_100_newest_first() {
    let harness = TestHarness::builder()
        .with_notifier(MockNotifier::not_ready())
        .build()
        .await
        .unwrap();

    let mut ids = Vec::new();
    for i in 0..105 {
        let mut body = valid_submission();
        body["subject"] = json!(format!("Subject {i}"));
        let (status, created) = harness.submit(&body).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(created["data"]["id"].as_str().unwrap().to_string());
    }

    let (_, list) = harness.list().await;
    assert_eq!(list["count"], 100);
    let data = list["data"].as_array().unwrap();
    assert_eq!(data.len(), 100);
    assert_eq!(data[0]["id"], ids[104].as_str());
    assert_eq!(data[99]["id"], ids[5].as_str());
}

#[tokio::test]
async fn forwarded_client_info_is_recorded() {
    let harness = TestHarness::new().await.unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "198.51.100.4")
        .header(header::USER_AGENT, "integration-test")
        .body(Body::from(valid_submission().to_string()))
        .unwrap();
    let response = harness.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, list) = harness.list().await;
    assert_eq!(list["data"][0]["ipAddress"], "198.51.100.4");
    assert_eq!(list["data"][0]["userAgent"], "integration-test");
}

#[tokio::test]
async fn root_and_health_endpoints() {
    let harness = TestHarness::new().await.unwrap();

    let (status, root) = harness.request(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(root["status"], "running");
    assert_eq!(root["cors"], "enabled");
    assert_eq!(root["endpoints"]["health"], "/api/health");

    let (status, health) = harness.request(Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "OK");
    assert!(health["timestamp"].is_string());
    assert!(health["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let harness = TestHarness::new().await.unwrap();
    let (status, body) = harness.request(Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let harness = TestHarness::new().await.unwrap();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "https://portfolio.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = harness.router().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn failing_app(expose_errors: bool) -> axum::Router {
    let contacts = ContactService::new(
        Arc::new(MemoryStore::failing()),
        Arc::new(MockNotifier::ready()),
        Duration::from_secs(1),
    )
    .with_error_detail(expose_errors);
    router(GatewayState::new(contacts))
}

#[tokio::test]
async fn store_failures_return_500() {
    let app = failing_app(false);

    let (status, body) = send(app.clone(), Method::POST, "/api/contact", Some(valid_submission())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "Failed to send message. Please try again or email me directly."
    );
    assert!(body.get("error").is_none());

    let (status, body) = send(app.clone(), Method::GET, "/api/contact", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch messages");

    let (status, body) = send(app, Method::DELETE, "/api/contact/abc", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to delete message");
}

#[tokio::test]
async fn development_mode_echoes_error_detail() {
    let app = failing_app(true);
    let (status, body) = send(app, Method::POST, "/api/contact", Some(valid_submission())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("storage error"));
}
