// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio contact service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Folio configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Outbound email notification settings.
    #[serde(default)]
    pub email: EmailConfig,
}

/// Deployment environment. Only `development` echoes internal error detail
/// back to HTTP clients.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
    Test,
}

impl Environment {
    /// Whether internal error detail may be shown to clients.
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to. All interfaces by default.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,

    /// Upper bound for each outbound notification attempt, in seconds.
    #[serde(default = "default_notify_timeout_secs")]
    pub notify_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            environment: Environment::default(),
            notify_timeout_secs: default_notify_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notify_timeout_secs() -> u64 {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    "folio.db".to_string()
}

fn default_wal_mode() -> bool {
    true
}

/// SMTP notification configuration.
///
/// Missing credentials do not fail startup: the notifier simply reports
/// itself as not ready and submissions are stored without email.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    /// Master switch for outbound email.
    #[serde(default = "default_email_enabled")]
    pub enabled: bool,

    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Use STARTTLS on a plain connection instead of implicit TLS.
    #[serde(default = "default_starttls")]
    pub starttls: bool,

    /// SMTP username (usually the sending mailbox).
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP password or app password.
    #[serde(default)]
    pub password: Option<String>,

    /// `From:` address. Defaults to `username` when unset.
    #[serde(default)]
    pub from_address: Option<String>,

    /// Address that receives new-submission notifications.
    #[serde(default)]
    pub admin_email: Option<String>,

    /// Name used to sign acknowledgement emails.
    #[serde(default)]
    pub owner_name: Option<String>,
}

impl EmailConfig {
    /// The address outbound mail is sent from.
    pub fn sender(&self) -> Option<&str> {
        self.from_address
            .as_deref()
            .or(self.username.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Whether both SMTP credentials are present.
    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.username) && present(&self.password)
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: default_email_enabled(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            starttls: default_starttls(),
            username: None,
            password: None,
            from_address: None,
            admin_email: None,
            owner_name: None,
        }
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("enabled", &self.enabled)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("starttls", &self.starttls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("from_address", &self.from_address)
            .field("admin_email", &self.admin_email)
            .field("owner_name", &self.owner_name)
            .finish()
    }
}

fn default_email_enabled() -> bool {
    true
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_starttls() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FolioConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.server.notify_timeout_secs, 10);
        assert_eq!(config.storage.database_path, "folio.db");
        assert!(config.email.enabled);
        assert_eq!(config.email.smtp_port, 587);
        assert!(config.email.username.is_none());
    }

    #[test]
    fn only_development_exposes_detail() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
        assert!(!Environment::Test.is_development());
    }

    #[test]
    fn sender_falls_back_to_username() {
        let mut email = EmailConfig {
            username: Some("me@example.com".into()),
            ..EmailConfig::default()
        };
        assert_eq!(email.sender(), Some("me@example.com"));

        email.from_address = Some("noreply@example.com".into());
        assert_eq!(email.sender(), Some("noreply@example.com"));
    }

    #[test]
    fn credentials_require_both_parts() {
        let mut email = EmailConfig {
            username: Some("me@example.com".into()),
            ..EmailConfig::default()
        };
        assert!(!email.has_credentials());

        email.password = Some(String::new());
        assert!(!email.has_credentials());

        email.password = Some("app-password".into());
        assert!(email.has_credentials());
    }

    #[test]
    fn debug_redacts_password() {
        let email = EmailConfig {
            password: Some("hunter2-secret".into()),
            ..EmailConfig::default()
        };
        let debug = format!("{email:?}");
        assert!(!debug.contains("hunter2-secret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn email_section_rejects_unknown_fields() {
        let toml_str = r#"
[email]
smtp_hots = "smtp.example.com"
"#;
        assert!(toml::from_str::<FolioConfig>(toml_str).is_err());
    }
}
