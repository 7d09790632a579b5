// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-side validation of untrusted contact-form input.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use folio_core::NewContact;

pub const MISSING_FIELDS: &str = "Please provide all required fields";

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const SUBJECT_MAX: usize = 200;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 2000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
});

/// Raw submission body. Fields are optional so that absence can be reported
/// with a dedicated message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Why a submission was rejected.
///
/// `message` is the headline shown to the user; `errors` lists every field
/// rule that failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub message: String,
    pub errors: Vec<String>,
}

impl ContactForm {
    /// Check every field rule and normalise the values.
    ///
    /// Client metadata is attached by the caller; it is never validated.
    pub fn validate(self) -> Result<NewContact, ValidationFailure> {
        let (Some(name), Some(email), Some(subject), Some(message)) =
            (self.name, self.email, self.subject, self.message)
        else {
            return Err(ValidationFailure {
                message: MISSING_FIELDS.to_string(),
                errors: Vec::new(),
            });
        };

        let name = name.trim().to_string();
        let email = email.trim().to_lowercase();
        let subject = subject.trim().to_string();
        let message = message.trim().to_string();

        let mut errors = Vec::new();
        check_length(&mut errors, &name, "Name", Some(NAME_MIN), NAME_MAX);
        if !EMAIL_RE.is_match(&email) {
            errors.push("Please provide a valid email address".to_string());
        }
        check_length(&mut errors, &subject, "Subject", None, SUBJECT_MAX);
        check_length(&mut errors, &message, "Message", Some(MESSAGE_MIN), MESSAGE_MAX);

        if let Some(first) = errors.first() {
            return Err(ValidationFailure {
                message: first.clone(),
                errors,
            });
        }

        Ok(NewContact {
            name,
            email,
            subject,
            message,
            ip_address: None,
            user_agent: None,
        })
    }
}

/// Lengths are counted in characters, not bytes.
fn check_length(errors: &mut Vec<String>, value: &str, label: &str, min: Option<usize>, max: usize) {
    let len = value.chars().count();
    if len == 0 {
        errors.push(format!("{label} is required"));
        return;
    }
    if let Some(min) = min.filter(|&min| len < min) {
        errors.push(format!("{label} must be at least {min} characters"));
    }
    if len > max {
        errors.push(format!("{label} cannot exceed {max} characters"));
    }
}
