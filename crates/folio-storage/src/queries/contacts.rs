// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact message operations.

use std::str::FromStr;

use folio_core::{ContactMessage, ContactStatus, FolioError};
use rusqlite::{params, OptionalExtension, Row};

use crate::database::{map_tr_err, Database};

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, status, ip_address, user_agent, created_at, updated_at";

fn row_to_contact(row: &Row<'_>) -> Result<ContactMessage, rusqlite::Error> {
    let status: String = row.get(5)?;
    let status = ContactStatus::from_str(&status).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        status,
        ip_address: row.get(6)?,
        user_agent: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// Insert a new contact message.
pub async fn insert_contact(db: &Database, contact: &ContactMessage) -> Result<(), FolioError> {
    let contact = contact.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO contact_messages
                 (id, name, email, subject, message, status, ip_address, user_agent, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    contact.id,
                    contact.name,
                    contact.email,
                    contact.subject,
                    contact.message,
                    contact.status.to_string(),
                    contact.ip_address,
                    contact.user_agent,
                    contact.created_at,
                    contact.updated_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get up to `limit` contact messages, newest first.
///
/// Rows created within the same millisecond fall back to insertion order.
pub async fn list_recent(db: &Database, limit: usize) -> Result<Vec<ContactMessage>, FolioError> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CONTACT_COLUMNS} FROM contact_messages
                 ORDER BY created_at DESC, rowid DESC LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![limit], row_to_contact)?;
            let mut contacts = Vec::new();
            for row in rows {
                contacts.push(row?);
            }
            Ok(contacts)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a contact message by id, returning the removed row if it existed.
pub async fn delete_contact(db: &Database, id: &str) -> Result<Option<ContactMessage>, FolioError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            conn.query_row(
                &format!("DELETE FROM contact_messages WHERE id = ?1 RETURNING {CONTACT_COLUMNS}"),
                params![id],
                row_to_contact,
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Count all stored contact messages.
pub async fn count_contacts(db: &Database) -> Result<i64, FolioError> {
    db.connection()
        .call(|conn| conn.query_row("SELECT COUNT(*) FROM contact_messages", [], |row| row.get(0)))
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    fn make_contact(id: &str, timestamp: &str) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: "Jo Doe".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "This is a test message.".to_string(),
            status: ContactStatus::New,
            ip_address: Some("10.0.0.1".to_string()),
            user_agent: Some("curl/8.0".to_string()),
            created_at: timestamp.to_string(),
            updated_at: timestamp.to_string(),
        }
    }

    #[tokio::test]
    async fn inserted_row_lists_unchanged() {
        let (db, _dir) = setup_db().await;
        let contact = make_contact("c1", "2026-01-01T00:00:01.000Z");
        insert_contact(&db, &contact).await.unwrap();

        assert_eq!(list_recent(&db, 10).await.unwrap(), vec![contact]);
        assert_eq!(count_contacts(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_and_limited() {
        let (db, _dir) = setup_db().await;
        for i in 0..5 {
            let contact = make_contact(&format!("c{i}"), &format!("2026-01-01T00:00:0{i}.000Z"));
            insert_contact(&db, &contact).await.unwrap();
        }

        let contacts = list_recent(&db, 3).await.unwrap();
        let ids: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c4", "c3", "c2"]);
    }

    #[tokio::test]
    async fn list_recent_breaks_timestamp_ties_by_insertion() {
        let (db, _dir) = setup_db().await;
        for id in ["first", "second", "third"] {
            insert_contact(&db, &make_contact(id, "2026-01-01T00:00:00.000Z"))
                .await
                .unwrap();
        }

        let contacts = list_recent(&db, 10).await.unwrap();
        let ids: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn delete_returns_row_once() {
        let (db, _dir) = setup_db().await;
        insert_contact(&db, &make_contact("c1", "2026-01-01T00:00:01.000Z"))
            .await
            .unwrap();

        let removed = delete_contact(&db, "c1").await.unwrap();
        assert_eq!(removed.map(|c| c.id).as_deref(), Some("c1"));
        assert!(delete_contact(&db, "c1").await.unwrap().is_none());
        assert_eq!(count_contacts(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let (db, _dir) = setup_db().await;
        let contact = make_contact("dup", "2026-01-01T00:00:01.000Z");
        insert_contact(&db, &contact).await.unwrap();
        let err = insert_contact(&db, &contact).await.unwrap_err();
        assert!(matches!(err, FolioError::Storage { .. }));
    }

    #[tokio::test]
    async fn status_round_trips_through_text_column() {
        let (db, _dir) = setup_db().await;
        let mut contact = make_contact("archived", "2026-01-01T00:00:01.000Z");
        contact.status = ContactStatus::Archived;
        insert_contact(&db, &contact).await.unwrap();

        let fetched = list_recent(&db, 1).await.unwrap();
        assert_eq!(fetched[0].status, ContactStatus::Archived);
    }
}
