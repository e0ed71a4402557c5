//! Contact submission normalization and the shared notification pipeline.
//!
//! Both entry points funnel their input into [`Submission`] and hand it to
//! [`dispatch`]; only the response rendering differs between them.

use serde::Deserialize;
use tracing::{info, warn};

use crate::discord::{build_notification, Notifier};

/// Placeholder for identity fields the visitor left blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder business type on the form path.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Default subject on the API path.
pub const GENERAL_ENQUIRY: &str = "General Enquiry";

// =============================================================================
// Request Shapes
// =============================================================================

/// Fields posted by the support-page contact form.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default, rename = "g-recaptcha-response")]
    pub recaptcha_token: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body accepted by the JSON API endpoint.
///
/// Older clients send `contact_name`/`business_type`, newer ones `name` and
/// `subject`; both spellings are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ApiContactRequest {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default, alias = "contact_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "business_type")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Submission
// =============================================================================

/// A normalized contact submission.
///
/// Transient: built from one request, rendered into a notification, dropped.
#[derive(Debug, Clone)]
pub struct Submission {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub message: String,
}

impl Submission {
    /// Normalize form input, defaulting absent fields to their placeholders.
    pub fn from_form(form: ContactForm) -> Self {
        Submission {
            business_name: form
                .business_name
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            contact_name: form
                .contact_name
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            email: form.email.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            phone: form.phone.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            business_type: form
                .business_type
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            message: form.message.unwrap_or_default(),
        }
    }

    /// Normalize API input. The subject defaults to a general enquiry rather
    /// than the form path's "Not specified".
    pub fn from_api(request: ApiContactRequest) -> Self {
        Submission {
            business_name: request
                .business_name
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            contact_name: request.name.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            email: request.email.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            phone: request.phone.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            business_type: request
                .subject
                .unwrap_or_else(|| GENERAL_ENQUIRY.to_string()),
            message: request.message.unwrap_or_default(),
        }
    }

    /// Whether the visitor supplied a usable email address.
    pub fn has_contact_email(&self) -> bool {
        !self.email.trim().is_empty() && self.email != NOT_PROVIDED
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Outcome of the notification pipeline for one accepted submission.
#[derive(Debug, Clone, Copy)]
pub struct DispatchReceipt {
    /// Whether the Discord webhook accepted the notification
    pub delivered: bool,
}

/// Format a submission and make the single outbound notification attempt.
///
/// Delivery problems are recorded in the receipt and logged with their typed
/// cause; they never propagate to the entry points, which decide per response
/// shape how much of the outcome to reveal.
pub async fn dispatch(notifier: &Notifier, submission: &Submission) -> DispatchReceipt {
    let payload = build_notification(submission);

    match notifier.send(&payload).await {
        Ok(()) => {
            info!(email = %submission.email, "contact_notification_sent");
            DispatchReceipt { delivered: true }
        }
        Err(e) => {
            warn!(email = %submission.email, error = %e, "contact_notification_failed");
            DispatchReceipt { delivered: false }
        }
    }
}
