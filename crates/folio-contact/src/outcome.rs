// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result of a contact operation, independent of any transport.

use folio_core::ContactMessage;

pub const SUBMIT_SUCCESS: &str =
    "Thank you! Your message has been received. I'll get back to you soon!";
pub const SUBMIT_FAILED: &str = "Failed to send message. Please try again or email me directly.";
pub const LIST_FAILED: &str = "Failed to fetch messages";
pub const DELETE_SUCCESS: &str = "Message deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete message";
pub const NOT_FOUND: &str = "Message not found";

/// Tagged outcome of a submit, list or delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// A submission was stored.
    Created(ContactMessage),
    /// Most recent records, newest first.
    Listed(Vec<ContactMessage>),
    /// A record was removed.
    Deleted,
    /// Input was rejected; nothing was stored.
    ValidationError { message: String, errors: Vec<String> },
    /// No record has the requested id.
    NotFound,
    /// The store failed. `detail` carries the underlying error only when
    /// error detail is exposed to clients.
    ServerError {
        message: &'static str,
        detail: Option<String>,
    },
}

impl ContactOutcome {
    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ContactOutcome::Created(_) | ContactOutcome::Listed(_) | ContactOutcome::Deleted
        )
    }
}
