// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission pipeline: validate, persist, then notify on a best-effort basis.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::error::Elapsed;
use tracing::{debug, error, info, warn};

use folio_core::{ContactMessage, ContactStore, FolioError, NotificationSink};

use crate::form::ContactForm;
use crate::outcome::{ContactOutcome, DELETE_FAILED, LIST_FAILED, SUBMIT_FAILED};

/// Maximum number of records returned by [`ContactService::list`].
pub const LIST_LIMIT: usize = 100;

/// Characters of the message body included in the submission log line.
const PREVIEW_CHARS: usize = 100;

/// Request metadata recorded alongside a submission. Never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Coordinates the contact store and the notification sink.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    notifier: Arc<dyn NotificationSink>,
    notify_timeout: Duration,
    expose_errors: bool,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn ContactStore>,
        notifier: Arc<dyn NotificationSink>,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            notify_timeout,
            expose_errors: false,
        }
    }

    /// Echo underlying store errors in [`ContactOutcome::ServerError`].
    /// Only enabled in development.
    pub fn with_error_detail(mut self, expose: bool) -> Self {
        self.expose_errors = expose;
        self
    }

    /// Validate and store a submission, then attempt both notifications.
    ///
    /// The write completes before any notification starts. Notification
    /// failures are logged and never change the outcome.
    pub async fn submit(&self, form: ContactForm, client: ClientInfo) -> ContactOutcome {
        let mut new_contact = match form.validate() {
            Ok(contact) => contact,
            Err(failure) => {
                debug!(reason = %failure.message, "contact submission rejected");
                return ContactOutcome::ValidationError {
                    message: failure.message,
                    errors: failure.errors,
                };
            }
        };
        new_contact.ip_address = client.ip_address;
        new_contact.user_agent = client.user_agent;

        let contact = match self.store.create(new_contact).await {
            Ok(contact) => contact,
            Err(e) => {
                error!(error = %e, "failed to store contact submission");
                return self.server_error(SUBMIT_FAILED, e);
            }
        };

        info!(
            id = %contact.id,
            name = %contact.name,
            email = %contact.email,
            subject = %contact.subject,
            preview = %preview(&contact.message),
            "new contact form submission"
        );

        self.notify(&contact).await;
        ContactOutcome::Created(contact)
    }

    /// The most recent [`LIST_LIMIT`] records, newest first.
    pub async fn list(&self) -> ContactOutcome {
        match self.store.list_recent(LIST_LIMIT).await {
            Ok(contacts) => ContactOutcome::Listed(contacts),
            Err(e) => {
                error!(error = %e, "failed to list contact messages");
                self.server_error(LIST_FAILED, e)
            }
        }
    }

    /// Remove the record with the given id.
    pub async fn delete(&self, id: &str) -> ContactOutcome {
        match self.store.delete(id).await {
            Ok(Some(removed)) => {
                info!(id = %removed.id, "contact message deleted");
                ContactOutcome::Deleted
            }
            Ok(None) => ContactOutcome::NotFound,
            Err(e) => {
                error!(id, error = %e, "failed to delete contact message");
                self.server_error(DELETE_FAILED, e)
            }
        }
    }

    /// Send the owner notification and the acknowledgement concurrently.
    /// Each send is bounded by the notify timeout; neither can block the other.
    async fn notify(&self, contact: &ContactMessage) {
        if !self.notifier.is_ready() {
            debug!(id = %contact.id, "email disabled, message saved to database only");
            return;
        }

        let timeout = self.notify_timeout;
        let (owner, ack) = tokio::join!(
            tokio::time::timeout(timeout, self.notifier.notify_owner(contact)),
            tokio::time::timeout(timeout, self.notifier.acknowledge_submitter(contact)),
        );

        let owner_ok = report("owner notification", &contact.id, timeout, owner);
        let ack_ok = report("acknowledgement", &contact.id, timeout, ack);
        if owner_ok && ack_ok {
            info!(id = %contact.id, "notification emails sent");
        }
    }

    fn server_error(&self, message: &'static str, err: FolioError) -> ContactOutcome {
        ContactOutcome::ServerError {
            message,
            detail: self.expose_errors.then(|| err.to_string()),
        }
    }
}

fn report(
    kind: &str,
    id: &str,
    timeout: Duration,
    result: Result<Result<(), FolioError>, Elapsed>,
) -> bool {
    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(id, kind, error = %e, "email sending failed, message saved anyway");
            false
        }
        Err(_) => {
            warn!(id, kind, ?timeout, "email sending timed out, message saved anyway");
            false
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `message`, with `...` when cut.
pub(crate) fn preview(message: &str) -> String {
    match message.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}
