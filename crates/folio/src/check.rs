// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio check`: print a summary of the validated configuration.

use folio_config::model::FolioConfig;

/// Prints the effective configuration. Secrets are never printed.
pub fn run_check(config: &FolioConfig) {
    for line in summary(config) {
        println!("{line}");
    }
}

fn summary(config: &FolioConfig) -> Vec<String> {
    let email = &config.email;
    let email_status = if !email.enabled {
        "disabled".to_string()
    } else if !email.has_credentials() {
        "enabled, credentials missing (submissions will be stored only)".to_string()
    } else if email.admin_email.is_none() {
        "enabled, admin_email missing (submissions will be stored only)".to_string()
    } else {
        format!("enabled via {}:{}", email.smtp_host, email.smtp_port)
    };

    vec![
        "folio: configuration OK".to_string(),
        format!("  listen:       {}:{}", config.server.host, config.server.port),
        format!("  environment:  {}", config.server.environment),
        format!("  log level:    {}", config.server.log_level),
        format!("  database:     {}", config.storage.database_path),
        format!("  email:        {email_status}"),
        format!(
            "  admin email:  {}",
            email.admin_email.as_deref().unwrap_or("(not set)")
        ),
    ]
}
