//! Contact submission endpoints.
//!
//! Two entry points share the pipeline in [`crate::submission`]:
//! - `POST /contact`: form-encoded, reCAPTCHA-gated, answers with a flash
//!   cookie and redirect. Delivery failures are hidden from the visitor and
//!   logged internally.
//! - `POST /submit-contact`: JSON (or form-encoded) API, validates the email
//!   address, answers with a JSON body that surfaces delivery status.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Form, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::captcha::CaptchaVerifier;
use crate::config::Config;
use crate::discord::Notifier;
use crate::submission::{dispatch, ApiContactRequest, ContactForm, Submission};
use crate::web::flash::{set_flash, Flash};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub captcha: CaptchaVerifier,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: Config, captcha: CaptchaVerifier, notifier: Notifier) -> Self {
        Self {
            config: Arc::new(config),
            captcha,
            notifier,
        }
    }
}

// =============================================================================
// Form Entry Point
// =============================================================================

/// Contact form endpoint.
///
/// Once the reCAPTCHA gate passes, the visitor always sees the success
/// notice, whatever the webhook did. Hiding delivery failures here is
/// deliberate; the internal warning log is the only trace.
pub async fn contact(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> (CookieJar, Redirect) {
    if !state.captcha.verify(&form.recaptcha_token).await {
        warn!("contact_captcha_rejected");
        return (
            set_flash(jar, Flash::CaptchaRequired),
            Redirect::to("/support"),
        );
    }

    let submission = Submission::from_form(form);
    info!(email = %submission.email, "contact_form_received");

    let receipt = dispatch(&state.notifier, &submission).await;
    if !receipt.delivered {
        warn!(email = %submission.email, "contact_form_delivery_failed");
    }

    let target = redirect_target(&headers);
    (set_flash(jar, Flash::Success), Redirect::to(&target))
}

/// Send the visitor back where they came from, unless that was the contact
/// flow itself or the Referer is absent or unparseable.
fn redirect_target(headers: &HeaderMap) -> String {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|r| Url::parse(r).ok());

    match referrer {
        Some(url) if !url.path().contains("contact") => url.to_string(),
        _ => "/support".to_string(),
    }
}

// =============================================================================
// JSON API Entry Point
// =============================================================================

/// Success body returned by the API endpoint.
#[derive(Debug, Serialize)]
pub struct ApiSuccess {
    pub success: bool,
    pub message: &'static str,
    pub discord_sent: bool,
}

#[derive(Debug, Serialize)]
struct ApiFailure {
    success: bool,
    error: String,
}

/// Rejections produced by the API entry point.
///
/// Every failure path is a typed branch; there is no catch-all handler for
/// this route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was neither valid JSON nor valid form encoding
    #[error("Invalid request body")]
    InvalidBody,

    /// Email address absent, empty, or the placeholder value
    #[error("Email is required")]
    MissingEmail,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiFailure {
            success: false,
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// JSON API endpoint for contact submissions.
///
/// Unlike the form endpoint, this path reports delivery status to the
/// caller via `discord_sent`.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiSuccess>, ApiError> {
    let request = parse_contact_body(&headers, &body)?;
    let submission = Submission::from_api(request);

    if !submission.has_contact_email() {
        warn!("contact_api_missing_email");
        return Err(ApiError::MissingEmail);
    }

    info!(email = %submission.email, "contact_api_received");

    let receipt = dispatch(&state.notifier, &submission).await;

    Ok(Json(ApiSuccess {
        success: true,
        message: "Thank you! We will contact you within 24 hours.",
        discord_sent: receipt.delivered,
    }))
}

/// Decode the request body by Content-Type: JSON when declared as such,
/// form encoding otherwise.
fn parse_contact_body(headers: &HeaderMap, body: &Bytes) -> Result<ApiContactRequest, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/json") {
        serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "contact_api_invalid_json");
            ApiError::InvalidBody
        })
    } else {
        serde_urlencoded::from_bytes(body).map_err(|e| {
            warn!(error = %e, "contact_api_invalid_form");
            ApiError::InvalidBody
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_referer(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_redirect_target_no_referer() {
        assert_eq!(redirect_target(&HeaderMap::new()), "/support");
    }

    #[test]
    fn test_redirect_target_uses_referer() {
        let headers = headers_with_referer("https://kitchio.example/pricing");
        assert_eq!(redirect_target(&headers), "https://kitchio.example/pricing");
    }

    #[test]
    fn test_redirect_target_rejects_contact_pages() {
        let headers = headers_with_referer("https://kitchio.example/contact");
        assert_eq!(redirect_target(&headers), "/support");
    }

    #[test]
    fn test_redirect_target_unparseable_referer() {
        let headers = headers_with_referer("not a url");
        assert_eq!(redirect_target(&headers), "/support");
    }

    #[test]
    fn test_parse_contact_body_json() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        let body = Bytes::from(r#"{"email": "a@b.example", "name": "A"}"#);

        let parsed = parse_contact_body(&headers, &body).unwrap();
        assert_eq!(parsed.email.as_deref(), Some("a@b.example"));
    }

    #[test]
    fn test_parse_contact_body_form_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        let body = Bytes::from("email=a%40b.example&subject=cafe");

        let parsed = parse_contact_body(&headers, &body).unwrap();
        assert_eq!(parsed.email.as_deref(), Some("a@b.example"));
        assert_eq!(parsed.subject.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_parse_contact_body_invalid_json() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        let body = Bytes::from("{not json");

        assert!(matches!(
            parse_contact_body(&headers, &body),
            Err(ApiError::InvalidBody)
        ));
    }
}
