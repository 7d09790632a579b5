// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across adapter traits and the contact pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Notification,
}

/// Triage state of a stored contact message.
///
/// New submissions always start as [`ContactStatus::New`]. The remaining
/// states belong to admin tooling and are never set by this service.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

/// A validated submission ready to be written to the store.
///
/// Produced only by the contact pipeline's validator, so every field already
/// satisfies the record constraints (trimmed, email lower-cased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Client address captured from the request.
    pub ip_address: Option<String>,
    /// Client `User-Agent` header captured from the request.
    pub user_agent: Option<String>,
}

/// A persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Unique record identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

impl ContactMessage {
    /// Build a record from a validated submission, assigning id, status and timestamps.
    pub fn from_new(new: NewContact) -> Self {
        let now = timestamp_now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            status: ContactStatus::New,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Current UTC time formatted as ISO 8601 with millisecond precision.
pub fn timestamp_now() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}
