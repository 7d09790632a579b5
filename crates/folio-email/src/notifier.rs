// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP implementation of the NotificationSink trait.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, Message, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info, warn};

use folio_config::model::EmailConfig;
use folio_core::types::timestamp_now;
use folio_core::{
    AdapterType, ContactMessage, FolioError, HealthStatus, NotificationSink, PluginAdapter,
};

use crate::templates;

/// Display name on outbound mail when no owner name is configured.
const DEFAULT_SENDER_NAME: &str = "Portfolio Contact";

/// SMTP-backed notification sink.
///
/// Constructed once at startup through [`SmtpNotifier::probe`]. The readiness
/// flag is fixed at construction; a notifier that is not ready never touches
/// the network.
pub struct SmtpNotifier {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
    admin: Option<Mailbox>,
    owner_name: Option<String>,
    ready: bool,
}

impl SmtpNotifier {
    /// A notifier that is permanently not ready.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: None,
            admin: None,
            owner_name: None,
            ready: false,
        }
    }

    /// Build the notifier from configuration and decide readiness.
    ///
    /// Missing credentials or admin address short-circuit to a not-ready
    /// notifier without any network call. Otherwise an SMTP connection test,
    /// bounded by `timeout`, decides.
    pub async fn probe(config: &EmailConfig, timeout: Duration) -> Self {
        if !config.enabled {
            info!("email notifications disabled by configuration");
            return Self::disabled();
        }

        let mut notifier = match Self::configure(config, timeout) {
            Ok(notifier) => notifier,
            Err(e) => {
                warn!(error = %e, "email notifications unavailable");
                return Self::disabled();
            }
        };

        let Some(transport) = notifier.transport.as_ref() else {
            return Self::disabled();
        };

        notifier.ready = match tokio::time::timeout(timeout, transport.test_connection()).await {
            Ok(Ok(true)) => {
                info!(host = %config.smtp_host, "email server is ready to send messages");
                true
            }
            Ok(Ok(false)) => {
                warn!(host = %config.smtp_host, "email server rejected connection test");
                false
            }
            Ok(Err(e)) => {
                warn!(host = %config.smtp_host, error = %e, "email configuration error");
                false
            }
            Err(_) => {
                warn!(host = %config.smtp_host, ?timeout, "email connection test timed out");
                false
            }
        };
        notifier
    }

    /// Build the transport and mailboxes without touching the network.
    ///
    /// The returned notifier is not ready until [`SmtpNotifier::probe`]
    /// confirms the connection.
    pub fn configure(config: &EmailConfig, timeout: Duration) -> Result<Self, FolioError> {
        if !config.has_credentials() {
            return Err(FolioError::notification("SMTP credentials not configured"));
        }
        let admin = config
            .admin_email
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| FolioError::notification("admin_email not configured"))?;
        let sender = config
            .sender()
            .ok_or_else(|| FolioError::notification("sender address not configured"))?;

        let admin = parse_mailbox(admin)?;
        let sender_name = config
            .owner_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());
        let from = Mailbox::new(Some(sender_name), parse_mailbox(sender)?.email);

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        }
        .map_err(|e| FolioError::Notification {
            message: format!("failed to configure SMTP transport for {}", config.smtp_host),
            source: Some(Box::new(e)),
        })?;

        let username = config.username.clone().unwrap_or_default();
        let password = config.password.clone().unwrap_or_default();
        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(timeout))
            .build();

        Ok(Self {
            transport: Some(transport),
            from: Some(from),
            admin: Some(admin),
            owner_name: config.owner_name.clone(),
            ready: false,
        })
    }

    /// Send one HTML email.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html: String,
        reply_to: Option<&str>,
    ) -> Result<(), FolioError> {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            return Err(FolioError::notification("email transport not configured"));
        };

        let mut builder = Message::builder()
            .from(from.clone())
            .to(parse_mailbox(to)?)
            .subject(subject);
        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }
        let message = builder
            .header(header::ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| FolioError::Notification {
                message: "failed to build email message".to_string(),
                source: Some(Box::new(e)),
            })?;

        transport
            .send(message)
            .await
            .map_err(|e| FolioError::Notification {
                message: format!("failed to send email to {to}"),
                source: Some(Box::new(e)),
            })?;
        debug!(subject, "email sent");
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), FolioError> {
        if self.ready {
            Ok(())
        } else {
            Err(FolioError::notification("email notifier is not ready"))
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, FolioError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| FolioError::Notification {
            message: format!("invalid email address: {address}"),
            source: Some(Box::new(e)),
        })
}

#[async_trait]
impl PluginAdapter for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notification
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        if self.ready {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(
                "email notifications disabled".to_string(),
            ))
        }
    }

    async fn shutdown(&self) -> Result<(), FolioError> {
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for SmtpNotifier {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn notify_owner(&self, contact: &ContactMessage) -> Result<(), FolioError> {
        self.ensure_ready()?;
        let admin = self
            .admin
            .as_ref()
            .ok_or_else(|| FolioError::notification("admin_email not configured"))?;
        let mail = templates::owner_notification(contact, &timestamp_now());
        self.send(
            &admin.email.to_string(),
            &mail.subject,
            mail.html,
            Some(contact.email.as_str()),
        )
        .await?;
        info!(id = %contact.id, "owner notification sent");
        Ok(())
    }

    async fn acknowledge_submitter(&self, contact: &ContactMessage) -> Result<(), FolioError> {
        self.ensure_ready()?;
        let mail = templates::acknowledgement(contact, self.owner_name.as_deref());
        self.send(&contact.email, &mail.subject, mail.html, None)
            .await?;
        info!(id = %contact.id, "acknowledgement sent");
        Ok(())
    }
}
