//! reCAPTCHA verification for the contact form.
//!
//! Policy: verification fails closed. An outage of the verification service
//! blocks submissions rather than letting them through.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, warn};

/// Response body from the siteverify endpoint.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Client for the reCAPTCHA verification service.
#[derive(Clone)]
pub struct CaptchaVerifier {
    client: Client,
    verify_url: String,
    secret: String,
    timeout: Duration,
}

impl CaptchaVerifier {
    pub fn new(client: Client, verify_url: String, secret: String, timeout: Duration) -> Self {
        Self {
            client,
            verify_url,
            secret,
            timeout,
        }
    }

    /// Verify a client-supplied reCAPTCHA token.
    ///
    /// An empty token is rejected without a network call. Transport errors,
    /// timeouts, and malformed responses all return `false`; nothing is
    /// raised to the caller.
    pub async fn verify(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            warn!("recaptcha_token_missing");
            return false;
        }

        let params = [("secret", self.secret.as_str()), ("response", token)];

        let response = match self
            .client
            .post(&self.verify_url)
            .form(&params)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = %e, "recaptcha_request_failed");
                return false;
            }
        };

        let result: VerifyResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "recaptcha_response_invalid");
                return false;
            }
        };

        if result.success {
            info!("recaptcha_verification_passed");
            true
        } else {
            warn!(error_codes = ?result.error_codes, "recaptcha_verification_failed");
            false
        }
    }
}
