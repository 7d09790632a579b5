// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-form submission pipeline.
//!
//! Validate, persist, then notify on a best-effort basis. Every operation
//! resolves to a [`ContactOutcome`] that the HTTP layer maps onto a response.

pub mod form;
pub mod outcome;
pub mod service;

pub use form::{ContactForm, ValidationFailure};
pub use outcome::ContactOutcome;
pub use service::{ClientInfo, ContactService, LIST_LIMIT};
