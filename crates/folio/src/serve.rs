// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio serve`: wire storage, notifier and gateway, then serve until shutdown.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use folio_config::model::FolioConfig;
use folio_contact::ContactService;
use folio_core::{FolioError, HealthStatus, NotificationSink, PluginAdapter};
use folio_email::SmtpNotifier;
use folio_gateway::GatewayState;
use folio_storage::SqliteStorage;

use crate::shutdown::shutdown_signal;

/// Runs the `folio serve` command.
///
/// Storage failures at startup are fatal. An unusable email setup is not:
/// the notifier is probed once and submissions are stored without email
/// when it is not ready.
pub async fn run_serve(config: FolioConfig) -> Result<(), FolioError> {
    init_tracing(&config.server.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        "starting folio serve"
    );

    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    let storage = Arc::new(storage);
    info!(
        path = %config.storage.database_path,
        messages = storage.count().await?,
        "storage ready"
    );

    let notify_timeout = Duration::from_secs(config.server.notify_timeout_secs);
    let notifier = Arc::new(SmtpNotifier::probe(&config.email, notify_timeout).await);
    if !notifier.is_ready() {
        info!("email disabled, form submissions will be saved to the database only");
    }
    let adapters: [&dyn PluginAdapter; 2] = [&*storage, &*notifier];
    report_health(&adapters).await;

    let contacts = ContactService::new(storage.clone(), notifier.clone(), notify_timeout)
        .with_error_detail(config.server.environment.is_development());

    folio_gateway::start_server(
        &config.server,
        GatewayState::new(contacts),
        shutdown_signal(),
    )
    .await?;

    if let Err(e) = notifier.shutdown().await {
        warn!(error = %e, "notifier shutdown failed");
    }
    storage.shutdown().await?;
    info!("folio stopped");
    Ok(())
}

/// Logs the health of each adapter. Returns whether all of them are healthy.
async fn report_health(adapters: &[&dyn PluginAdapter]) -> bool {
    let mut healthy = true;
    for adapter in adapters {
        let name = adapter.name();
        let version = adapter.version();
        let kind = adapter.adapter_type();
        match adapter.health_check().await {
            Ok(HealthStatus::Healthy) => info!(adapter = name, %version, %kind, "adapter healthy"),
            Ok(HealthStatus::Degraded(reason)) => {
                healthy = false;
                warn!(adapter = name, %version, %kind, %reason, "adapter degraded");
            }
            Ok(HealthStatus::Unhealthy(reason)) => {
                healthy = false;
                error!(adapter = name, %version, %kind, %reason, "adapter unhealthy");
            }
            Err(e) => {
                healthy = false;
                error!(adapter = name, %version, %kind, error = %e, "adapter health check failed");
            }
        }
    }
    healthy
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("folio={log_level},tower_http={log_level},warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
