// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./folio.toml` > `~/.config/folio/folio.toml` > `/etc/folio/folio.toml`
//! with environment variable overrides via the `FOLIO_` prefix. The bare
//! `PORT`, `NODE_ENV`, `EMAIL_USER`, `EMAIL_PASS` and `ADMIN_EMAIL` variables
//! used by common hosting setups are honoured too, below `FOLIO_*`.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;
use std::str::FromStr;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::{Environment, FolioConfig};

/// Bare environment variables accepted for hosting-platform compatibility.
const PLATFORM_ENV_KEYS: &[&str] = &["PORT", "EMAIL_USER", "EMAIL_PASS", "ADMIN_EMAIL"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/folio/folio.toml` (system-wide)
/// 3. `~/.config/folio/folio.toml` (user XDG config)
/// 4. `./folio.toml` (local directory)
/// 5. Bare platform variables (`PORT`, `NODE_ENV`, `EMAIL_USER`, ...)
/// 6. `FOLIO_*` environment variables
pub fn load_config() -> Result<FolioConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FolioConfig, figment::Error> {
    with_env(
        Figment::new()
            .merge(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file(path)),
    )
    .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    with_env(
        Figment::new()
            .merge(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("/etc/folio/folio.toml"))
            .merge(Toml::file(
                dirs::config_dir()
                    .map(|d| d.join("folio/folio.toml"))
                    .unwrap_or_default(),
            ))
            .merge(Toml::file("folio.toml")),
    )
}

/// Layer the platform variables, then `FOLIO_*`, over the file layers.
fn with_env(mut figment: Figment) -> Figment {
    figment = figment.merge(platform_env_provider());
    if let Ok(value) = std::env::var("NODE_ENV") {
        figment = figment.merge(Serialized::default(
            "server.environment",
            node_environment(&value),
        ));
    }
    figment.merge(env_provider())
}

/// `NODE_ENV` never fails loading: names other than the known environments
/// mean production.
pub(crate) fn node_environment(value: &str) -> Environment {
    Environment::from_str(&value.trim().to_ascii_lowercase()).unwrap_or_default()
}

/// Create the `FOLIO_` provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `FOLIO_EMAIL_ADMIN_EMAIL` must map to `email.admin_email`.
fn env_provider() -> Env {
    Env::prefixed("FOLIO_").map(|key| {
        // `key` is the env var name with the prefix stripped.
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("email_", "email.", 1);
        mapped.into()
    })
}

/// Map the bare hosting-platform variables onto their config keys.
fn platform_env_provider() -> Env {
    Env::raw().only(PLATFORM_ENV_KEYS).map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        let mapped = match key.as_str() {
            "port" => Some("server.port"),
            "email_user" => Some("email.username"),
            "email_pass" => Some("email.password"),
            "admin_email" => Some("email.admin_email"),
            _ => None,
        };
        mapped.map(str::to_string).unwrap_or(key).into()
    })
}
