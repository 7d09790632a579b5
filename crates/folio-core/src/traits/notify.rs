// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for best-effort outbound messages.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::ContactMessage;

/// Adapter for delivering notifications about new contact messages.
///
/// Readiness is decided once when the adapter is constructed. Callers check
/// [`NotificationSink::is_ready`] and skip delivery entirely when it is false.
#[async_trait]
pub trait NotificationSink: PluginAdapter {
    /// Whether the sink may be used for the lifetime of this process.
    fn is_ready(&self) -> bool;

    /// Tells the site owner about a new submission.
    async fn notify_owner(&self, contact: &ContactMessage) -> Result<(), FolioError>;

    /// Sends the submitter an acknowledgement of receipt.
    async fn acknowledge_submitter(&self, contact: &ContactMessage) -> Result<(), FolioError>;
}
