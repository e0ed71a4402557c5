//! Discord webhook delivery.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

use super::format::WebhookPayload;

/// Reasons a webhook delivery can fail.
///
/// Distinguished so logs can tell a Discord outage from a slow network or a
/// rejected payload.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request timed out")]
    Timeout,

    #[error("could not connect to webhook endpoint")]
    Connect,

    #[error("webhook returned status {0}")]
    Status(u16),

    #[error("webhook transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Client for the Discord notification webhook.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    webhook_url: String,
    timeout: Duration,
}

impl Notifier {
    pub fn new(client: Client, webhook_url: String, timeout: Duration) -> Self {
        Self {
            client,
            webhook_url,
            timeout,
        }
    }

    /// POST the payload to the webhook. Discord signals success with 204.
    ///
    /// Errors are classified here and consumed by the submission pipeline;
    /// they never reach a request handler.
    pub async fn send(&self, payload: &WebhookPayload) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!("discord_webhook_sent");
            Ok(())
        } else {
            error!(status = status.as_u16(), "discord_webhook_rejected");
            Err(DeliveryError::Status(status.as_u16()))
        }
    }
}

fn classify(e: reqwest::Error) -> DeliveryError {
    if e.is_timeout() {
        error!(error = %e, "discord_webhook_timeout");
        DeliveryError::Timeout
    } else if e.is_connect() {
        error!(error = %e, "discord_webhook_connection_error");
        DeliveryError::Connect
    } else {
        error!(error = %e, "discord_webhook_error");
        DeliveryError::Transport(e)
    }
}
