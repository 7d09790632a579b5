// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the contact REST API.
//!
//! Each handler delegates to [`folio_contact::ContactService`] and maps the
//! resulting [`ContactOutcome`] onto a status code and JSON envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use folio_contact::outcome::{DELETE_SUCCESS, NOT_FOUND, SUBMIT_SUCCESS};
use folio_contact::ContactOutcome;
use folio_core::ContactMessage;
use folio_core::types::timestamp_now;

use crate::body::ContactBody;
use crate::client::RequestClient;
use crate::server::GatewayState;

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub cors: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub contact: &'static str,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub cors: &'static str,
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: SubmittedContact,
}

/// The subset of a stored record echoed back to the submitter.
#[derive(Debug, Serialize)]
pub struct SubmittedContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
}

/// Response body for GET /api/contact.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ContactMessage>,
}

/// Response body carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Vec::new(),
            error: None,
        }
    }
}

/// GET /
pub async fn get_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Portfolio Backend API - Live!",
        status: "running",
        cors: "enabled",
        endpoints: Endpoints {
            health: "/api/health",
            contact: "/api/contact (POST)",
        },
    })
}

/// GET /api/health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
        timestamp: timestamp_now(),
        version: env!("CARGO_PKG_VERSION"),
        cors: "enabled for all origins",
    })
}

/// POST /api/contact
///
/// Takes a JSON or urlencoded form body; unparsable bodies are rejected with
/// 400 before reaching the pipeline.
pub async fn post_contact(
    State(state): State<GatewayState>,
    RequestClient(client): RequestClient,
    ContactBody(form): ContactBody,
) -> Response {
    outcome_response(state.contacts.submit(form, client).await)
}

/// GET /api/contact
pub async fn list_contacts(State(state): State<GatewayState>) -> Response {
    outcome_response(state.contacts.list().await)
}

/// DELETE /api/contact/{id}
pub async fn delete_contact(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Response {
    outcome_response(state.contacts.delete(&id).await)
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
        .into_response()
}

/// Map a pipeline outcome onto an HTTP response.
pub fn outcome_response(outcome: ContactOutcome) -> Response {
    match outcome {
        ContactOutcome::Created(contact) => (
            StatusCode::CREATED,
            Json(SubmitResponse {
                success: true,
                message: SUBMIT_SUCCESS,
                data: SubmittedContact {
                    id: contact.id,
                    name: contact.name,
                    email: contact.email,
                    subject: contact.subject,
                },
            }),
        )
            .into_response(),
        ContactOutcome::Listed(contacts) => Json(ListResponse {
            success: true,
            count: contacts.len(),
            data: contacts,
        })
        .into_response(),
        ContactOutcome::Deleted => Json(MessageResponse {
            success: true,
            message: DELETE_SUCCESS,
        })
        .into_response(),
        ContactOutcome::ValidationError { message, errors } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                message,
                errors,
                error: None,
            }),
        )
            .into_response(),
        ContactOutcome::NotFound => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOT_FOUND))).into_response()
        }
        ContactOutcome::ServerError { message, detail } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                message: message.to_string(),
                errors: Vec::new(),
                error: detail,
            }),
        )
            .into_response(),
    }
}
