// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end HTTP testing.
//!
//! `TestHarness` assembles the full stack: SQLite storage in a temp
//! directory, a [`MockNotifier`], the contact service and the axum router.
//! Requests are driven through `tower::ServiceExt::oneshot` without binding
//! a socket.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use folio_config::model::StorageConfig;
use folio_contact::ContactService;
use folio_core::{ContactStore, FolioError};
use folio_gateway::GatewayState;
use folio_storage::SqliteStorage;

use crate::mock_notifier::MockNotifier;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    notifier: MockNotifier,
    notify_timeout: Duration,
    expose_errors: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            notifier: MockNotifier::ready(),
            notify_timeout: Duration::from_secs(10),
            expose_errors: false,
        }
    }

    /// Use a specific notification sink.
    pub fn with_notifier(mut self, notifier: MockNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Bound each notification send.
    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Echo store errors to clients, as in development.
    pub fn with_error_detail(mut self) -> Self {
        self.expose_errors = true;
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub async fn build(self) -> Result<TestHarness, FolioError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| FolioError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage = SqliteStorage::new(StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        });
        storage.initialize().await?;
        let storage = Arc::new(storage);
        let notifier = Arc::new(self.notifier);

        let store: Arc<dyn ContactStore> = storage.clone();
        let contacts = ContactService::new(store, notifier.clone(), self.notify_timeout)
            .with_error_detail(self.expose_errors);
        let router = folio_gateway::router(GatewayState::new(contacts));

        Ok(TestHarness {
            router,
            storage,
            notifier,
            _temp_dir: temp_dir,
        })
    }
}

/// A running application stack for integration tests.
pub struct TestHarness {
    router: Router,
    pub storage: Arc<SqliteStorage>,
    pub notifier: Arc<MockNotifier>,
    // Held so the database directory outlives the harness.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Harness with default settings and a ready notifier.
    pub async fn new() -> Result<Self, FolioError> {
        Self::builder().build().await
    }

    /// Send a request and return the status with the parsed JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Body>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.unwrap_or_else(Body::empty))
            .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// POST a JSON value to /api/contact.
    pub async fn submit(&self, body: &Value) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/contact",
            Some(Body::from(body.to_string())),
        )
        .await
    }

    /// GET /api/contact.
    pub async fn list(&self) -> (StatusCode, Value) {
        self.request(Method::GET, "/api/contact", None).await
    }

    /// DELETE /api/contact/{id}.
    pub async fn delete(&self, id: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, &format!("/api/contact/{id}"), None)
            .await
    }

    /// The router, for tests that need to craft raw requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// A submission that passes every validation rule.
pub fn valid_submission() -> Value {
    serde_json::json!({
        "name": "Jo Doe",
        "email": "jo@example.com",
        "subject": "Hi",
        "message": "This is a test message."
    })
}
