// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind addresses, non-empty paths, and sane timeouts.

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound for `server.notify_timeout_secs`.
const MAX_NOTIFY_TIMEOUT_SECS: u64 = 120;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.log_level `{}` must be one of {}",
                config.server.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.server.notify_timeout_secs == 0
        || config.server.notify_timeout_secs > MAX_NOTIFY_TIMEOUT_SECS
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.notify_timeout_secs must be between 1 and {MAX_NOTIFY_TIMEOUT_SECS}, got {}",
                config.server.notify_timeout_secs
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.email.enabled {
        if config.email.smtp_host.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "email.smtp_host must not be empty when email is enabled".to_string(),
            });
        }
        if config.email.smtp_port == 0 {
            errors.push(ConfigError::Validation {
                message: "email.smtp_port must not be 0".to_string(),
            });
        }
    }

    for (key, value) in [
        ("email.admin_email", &config.email.admin_email),
        ("email.from_address", &config.email.from_address),
    ] {
        if let Some(addr) = value {
            if !addr.contains('@') {
                errors.push(ConfigError::Validation {
                    message: format!("{key} `{addr}` is not an email address"),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
