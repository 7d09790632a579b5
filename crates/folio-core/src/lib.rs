// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio contact service.
//!
//! This crate provides the trait definitions, error type, and domain types
//! shared by the storage, email, contact and gateway crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FolioError;
pub use types::{AdapterType, ContactMessage, ContactStatus, HealthStatus, NewContact};

pub use traits::{ContactStore, NotificationSink, PluginAdapter};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample_new() -> NewContact {
        NewContact {
            name: "Jo Doe".into(),
            email: "jo@example.com".into(),
            subject: "Hi".into(),
            message: "This is a test message.".into(),
            ip_address: Some("127.0.0.1".into()),
            user_agent: None,
        }
    }

    #[test]
    fn folio_error_variants_display() {
        let err = FolioError::Storage {
            source: Box::new(std::io::Error::other("disk full")),
        };
        assert_eq!(err.to_string(), "storage error: disk full");

        let err = FolioError::notification("smtp refused");
        assert_eq!(err.to_string(), "notification error: smtp refused");

        let err = FolioError::Server {
            message: "failed to bind server to 0.0.0.0:5000".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "server error: failed to bind server to 0.0.0.0:5000");
    }

    #[test]
    fn contact_status_defaults_to_new() {
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }

    #[test]
    fn contact_status_string_forms_are_lowercase() {
        for (status, text) in [
            (ContactStatus::New, "new"),
            (ContactStatus::Read, "read"),
            (ContactStatus::Replied, "replied"),
            (ContactStatus::Archived, "archived"),
        ] {
            assert_eq!(status.to_string(), text);
            assert_eq!(ContactStatus::from_str(text).unwrap(), status);
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{text}\""));
        }
        assert!(ContactStatus::from_str("spam").is_err());
    }

    #[test]
    fn from_new_assigns_identity_and_timestamps() {
        let a = ContactMessage::from_new(sample_new());
        let b = ContactMessage::from_new(sample_new());

        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.status, ContactStatus::New);
        assert_eq!(a.created_at, a.updated_at);
        assert!(a.created_at.ends_with('Z'));
        assert_eq!(a.ip_address.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn contact_message_serializes_camel_case() {
        let contact = ContactMessage::from_new(sample_new());
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(json["name"], "Jo Doe");
        assert_eq!(json["status"], "new");
        assert_eq!(json["ipAddress"], "127.0.0.1");
        assert!(json["userAgent"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_contact_store<T: ContactStore>() {}
        fn _assert_notification_sink<T: NotificationSink>() {}
    }
}
