// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable record store for contact messages.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ContactMessage, NewContact};

/// Adapter for the contact message store.
///
/// Each operation is atomic at the store level; callers never need a
/// transaction spanning more than one call.
#[async_trait]
pub trait ContactStore: PluginAdapter {
    /// Persists a validated submission and returns the stored record with
    /// its assigned id and timestamps.
    async fn create(&self, contact: NewContact) -> Result<ContactMessage, FolioError>;

    /// Returns at most `limit` records, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessage>, FolioError>;

    /// Removes the record with the given id, returning it if it existed.
    async fn delete(&self, id: &str) -> Result<Option<ContactMessage>, FolioError>;
}
