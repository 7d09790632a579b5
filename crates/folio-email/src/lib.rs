// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP notification sink for new contact messages.
//!
//! [`SmtpNotifier`] sends the owner notification and the submitter
//! acknowledgement through `lettre`. Whether it may be used at all is decided
//! once, by [`SmtpNotifier::probe`], when the process starts.

pub mod notifier;
pub mod templates;

pub use notifier::SmtpNotifier;
pub use templates::Email;
