// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory contact store for deterministic testing.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::types::{AdapterType, HealthStatus};
use folio_core::{ContactMessage, ContactStore, FolioError, NewContact, PluginAdapter};

/// A contact store backed by a `Vec`, kept in insertion order.
///
/// [`MemoryStore::set_failing`] makes every operation return a storage
/// error, for exercising the server-error paths.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ContactMessage>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert a record as-is, bypassing id and timestamp assignment.
    pub async fn seed(&self, contact: ContactMessage) {
        self.records.lock().await.push(contact);
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of all records in insertion order.
    pub async fn records(&self) -> Vec<ContactMessage> {
        self.records.lock().await.clone()
    }

    fn check(&self) -> Result<(), FolioError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(FolioError::Storage {
                source: "memory store is in failing mode".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        self.check()?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), FolioError> {
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn create(&self, contact: NewContact) -> Result<ContactMessage, FolioError> {
        self.check()?;
        let record = ContactMessage::from_new(contact);
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    /// Newest first: by `created_at` descending, later insertions winning ties.
    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessage>, FolioError> {
        self.check()?;
        let records = self.records.lock().await;
        let mut indexed: Vec<(usize, &ContactMessage)> = records.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        Ok(indexed
            .into_iter()
            .take(limit)
            .map(|(_, c)| c.clone())
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<Option<ContactMessage>, FolioError> {
        self.check()?;
        let mut records = self.records.lock().await;
        Ok(records
            .iter()
            .position(|c| c.id == id)
            .map(|pos| records.remove(pos)))
    }
}
