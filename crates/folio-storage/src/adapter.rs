// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the ContactStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use folio_config::model::StorageConfig;
use folio_core::{
    AdapterType, ContactMessage, ContactStore, FolioError, HealthStatus, NewContact,
    PluginAdapter,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed contact store.
///
/// Wraps a [`Database`] handle and delegates all operations to the typed
/// query modules. The database is opened on the first call to
/// [`SqliteStorage::initialize`]; every store operation fails with
/// [`FolioError::Storage`] until then.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`](Self::initialize) is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database, applying PRAGMAs and pending migrations.
    pub async fn initialize(&self) -> Result<(), FolioError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| FolioError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    /// Number of stored contact messages.
    pub async fn count(&self) -> Result<i64, FolioError> {
        queries::contacts::count_contacts(self.db()?).await
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, FolioError> {
        self.db.get().ok_or_else(|| FolioError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        let Some(db) = self.db.get() else {
            return Ok(HealthStatus::Unhealthy("storage not initialized".to_string()));
        };
        let probe = db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("SELECT 1", [], |_| Ok(()))?;
                Ok(())
            })
            .await;
        Ok(match probe {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        })
    }

    async fn shutdown(&self) -> Result<(), FolioError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for SqliteStorage {
    async fn create(&self, contact: NewContact) -> Result<ContactMessage, FolioError> {
        let db = self.db()?;
        let record = ContactMessage::from_new(contact);
        queries::contacts::insert_contact(db, &record).await?;
        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessage>, FolioError> {
        queries::contacts::list_recent(self.db()?, limit).await
    }

    async fn delete(&self, id: &str) -> Result<Option<ContactMessage>, FolioError> {
        queries::contacts::delete_contact(self.db()?, id).await
    }
}
