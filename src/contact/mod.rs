// SPDX-License-Identifier: MPL-2.0
//! Guest inquiries: the contact form's data, validation, and submission
//! state.
//!
//! The wire format matches what the site's PHP endpoint has always
//! received: a flat JSON object with every field present, the optional
//! source sent as an empty string when unanswered. The endpoint answers
//! `{"success": bool, "message": ...}` in the body regardless of the
//! HTTP status line.

pub mod client;

use crate::error::ContactError;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use client::ContactClient;

/// Fallback shown to the guest when a submission fails without a
/// message worth showing (transport errors, unreadable responses).
pub const GENERIC_REJECTION: &str =
    "No pudimos enviar tu consulta. Por favor, intentá nuevamente más tarde.";

/// Where the guest heard about the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquirySource {
    Instagram,
    Recommendation,
    Google,
    Portal,
    Other,
}

impl InquirySource {
    /// All sources, in the order the form's dropdown offers them.
    pub const VARIANTS: [InquirySource; 5] = [
        InquirySource::Instagram,
        InquirySource::Recommendation,
        InquirySource::Google,
        InquirySource::Portal,
        InquirySource::Other,
    ];

    /// Returns the value the form submits for this source.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            InquirySource::Instagram => "instagram",
            InquirySource::Recommendation => "recommendation",
            InquirySource::Google => "google",
            InquirySource::Portal => "portal",
            InquirySource::Other => "other",
        }
    }

    /// Parses a source from its form value. The empty string is not a
    /// source; it stands for "unanswered" and maps to `None` upstream.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        InquirySource::VARIANTS.into_iter().find(|s| s.slug() == slug)
    }
}

impl fmt::Display for InquirySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Optional "how did you hear about us" answer.
    #[serde(serialize_with = "serialize_source")]
    pub source: Option<InquirySource>,
}

impl Inquiry {
    /// Checks the inquiry the way the form did before submitting.
    ///
    /// Name, email, phone, and message are required; whitespace-only
    /// values count as blank. The email must have a `user@host` shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(ContactError::MissingField("phone"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

/// Same shape check the form's email input applied: one `@` with
/// something on both sides and no whitespace anywhere.
fn plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

fn serialize_source<S>(source: &Option<InquirySource>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match source {
        Some(source) => serializer.serialize_str(source.slug()),
        None => serializer.serialize_str(""),
    }
}

/// What the contact endpoint answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Lifecycle of one submission attempt, as the form button shows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Form is editable, nothing in flight.
    #[default]
    Idle,
    /// Request sent, waiting for the endpoint.
    Sending,
    /// The endpoint accepted the inquiry.
    Accepted,
    /// Something went wrong; carries the message to show the guest.
    Rejected(String),
}

impl SubmissionState {
    /// Marks the start of a submission attempt.
    pub fn begin(&mut self) {
        *self = SubmissionState::Sending;
    }

    /// Records the outcome of a submission attempt.
    ///
    /// Endpoint and validation messages pass through; transport errors
    /// carry technical detail not meant for guests, so they collapse to
    /// [`GENERIC_REJECTION`].
    pub fn settle(&mut self, outcome: &Result<Acknowledgement, ContactError>) {
        *self = match outcome {
            Ok(_) => SubmissionState::Accepted,
            Err(ContactError::Rejected(message)) => SubmissionState::Rejected(message.clone()),
            Err(ContactError::Network(_)) => {
                SubmissionState::Rejected(GENERIC_REJECTION.to_string())
            }
            Err(error) => SubmissionState::Rejected(error.to_string()),
        };
    }

    /// Returns to the editable state, as "send another" does.
    pub fn reset(&mut self) {
        *self = SubmissionState::Idle;
    }

    /// Checks if a request is in flight (the submit button disables).
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionState::Sending)
    }

    /// Returns the message to show when the last attempt failed.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
