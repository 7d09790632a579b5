// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Folio contact service.
//!
//! TOML files in the usual locations are layered under environment
//! variables, deserialized with `deny_unknown_fields`, then validated.
//! Every problem comes back as a [`ConfigError`] diagnostic.
//!
//! ```no_run
//! let config = match folio_config::load_and_validate() {
//!     Ok(config) => config,
//!     Err(errors) => {
//!         folio_config::render_errors(&errors);
//!         std::process::exit(1);
//!     }
//! };
//! println!("listening on port {}", config.server.port);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::{Path, PathBuf};

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::FolioConfig;

/// Load from the standard file locations plus environment, then validate.
pub fn load_and_validate() -> Result<FolioConfig, Vec<ConfigError>> {
    finish(loader::load_config(), read_sources(&standard_paths()))
}

/// Load from an explicit file plus environment, then validate.
pub fn load_and_validate_path(path: &Path) -> Result<FolioConfig, Vec<ConfigError>> {
    finish(
        loader::load_config_from_path(path),
        read_sources(&[path.to_path_buf()]),
    )
}

/// Load from a TOML string over the defaults, then validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<FolioConfig, Vec<ConfigError>> {
    finish(
        loader::load_config_from_str(toml_content),
        vec![("<inline>".to_string(), toml_content.to_string())],
    )
}

fn finish(
    loaded: Result<FolioConfig, figment::Error>,
    sources: Vec<(String, String)>,
) -> Result<FolioConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|err| ConfigError::from_figment(err, &sources))?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Config files consulted by [`load_and_validate`], lowest precedence first.
fn standard_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/folio/folio.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("folio").join("folio.toml"));
    }
    let local = std::env::current_dir()
        .map(|d| d.join("folio.toml"))
        .unwrap_or_else(|_| PathBuf::from("folio.toml"));
    paths.push(local);
    paths
}

/// Contents of the files that exist, keyed by display path, for span lookup.
fn read_sources(paths: &[PathBuf]) -> Vec<(String, String)> {
    paths
        .iter()
        .filter_map(|path| {
            std::fs::read_to_string(path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
