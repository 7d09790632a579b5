// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact form body extraction.
//!
//! Accepts JSON and `application/x-www-form-urlencoded` bodies. Anything the
//! parsers reject becomes a 400 with the shared error envelope.

use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::debug;

use folio_contact::ContactForm;

use crate::handlers::ErrorResponse;

const INVALID_BODY: &str = "Invalid request body";

/// The submitted contact form, from either body encoding.
#[derive(Debug)]
pub struct ContactBody(pub ContactForm);

impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if is_form(req.headers()) {
            Form::<ContactForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<ContactForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|rejection| rejection.body_text())
        };

        parsed.map(Self).map_err(|reason| {
            debug!(error = %reason, "rejected contact request body");
            let mut body = ErrorResponse::new(INVALID_BODY);
            body.errors.push(reason);
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        })
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
