// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted notification sink that records every delivery attempt.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::types::{AdapterType, HealthStatus};
use folio_core::{ContactMessage, FolioError, NotificationSink, PluginAdapter};

/// Which sink method was called, and for which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyCall {
    Owner(String),
    Acknowledgement(String),
}

/// A notification sink for tests.
///
/// Readiness, failure and delay are fixed at construction. Every call is
/// recorded before the scripted result is returned, so failing calls are
/// counted too.
pub struct MockNotifier {
    ready: bool,
    fail_owner: bool,
    fail_ack: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<NotifyCall>>,
}

impl MockNotifier {
    /// A ready sink where every send succeeds.
    pub fn ready() -> Self {
        Self {
            ready: true,
            fail_owner: false,
            fail_ack: false,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A sink that reports itself as not ready.
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::ready()
        }
    }

    /// A ready sink where every send fails.
    pub fn failing() -> Self {
        Self {
            fail_owner: true,
            fail_ack: true,
            ..Self::ready()
        }
    }

    /// A ready sink where only the owner notification fails.
    pub fn failing_owner() -> Self {
        Self {
            fail_owner: true,
            ..Self::ready()
        }
    }

    /// Sleep for `delay` before every send.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn calls(&self) -> Vec<NotifyCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn record(&self, call: NotifyCall, fail: bool) -> Result<(), FolioError> {
        self.calls.lock().await.push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if fail {
            Err(FolioError::notification("mock send failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PluginAdapter for MockNotifier {
    fn name(&self) -> &str {
        "mock-notifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notification
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), FolioError> {
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for MockNotifier {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn notify_owner(&self, contact: &ContactMessage) -> Result<(), FolioError> {
        self.record(NotifyCall::Owner(contact.id.clone()), self.fail_owner)
            .await
    }

    async fn acknowledge_submitter(&self, contact: &ContactMessage) -> Result<(), FolioError> {
        self.record(
            NotifyCall::Acknowledgement(contact.id.clone()),
            self.fail_ack,
        )
        .await
    }
}
