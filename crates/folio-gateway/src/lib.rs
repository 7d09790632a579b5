// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Folio contact service.
//!
//! Binds the contact pipeline to a small JSON REST surface:
//!
//! - `POST /api/contact` submit the contact form (JSON or urlencoded)
//! - `GET /api/contact` list the most recent submissions
//! - `DELETE /api/contact/{id}` remove a submission
//! - `GET /` and `GET /api/health` service status
//!
//! CORS is permissive. List and delete are unauthenticated.

pub mod body;
pub mod client;
pub mod handlers;
pub mod server;

pub use server::{GatewayState, router, start_server};
