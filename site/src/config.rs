//! Configuration module for environment variable parsing.
//!
//! Secrets are required and have no embedded fallback; the server refuses to
//! start without them.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Google's reCAPTCHA verification endpoint.
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Raised at startup when a required variable is absent or blank.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// reCAPTCHA secret shared with the verification service
    pub recaptcha_secret: String,

    /// reCAPTCHA verification endpoint (overridable for testing)
    pub recaptcha_verify_url: String,

    /// Discord webhook URL for contact notifications
    pub discord_webhook_url: String,

    /// Timeout in milliseconds applied to each outbound HTTP request
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `RECAPTCHA_SECRET_KEY` and `DISCORD_WEBHOOK_URL` are mandatory; an
    /// empty value counts as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),

            recaptcha_secret: require("RECAPTCHA_SECRET_KEY")?,

            recaptcha_verify_url: env::var("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|_| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),

            discord_webhook_url: require("DISCORD_WEBHOOK_URL")?,

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        })
    }

    /// Timeout applied to each outbound request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}
