//! Integration tests for the two outbound HTTP integrations, against a mock
//! verification service and a mock webhook endpoint.

use std::time::Duration;

use httpmock::prelude::*;
use reqwest::Client;

use kitchio::discord::{build_notification, DeliveryError, Notifier};
use kitchio::submission::{ContactForm, Submission};
use kitchio::CaptchaVerifier;

fn verifier_for(server: &MockServer, timeout_ms: u64) -> CaptchaVerifier {
    CaptchaVerifier::new(
        Client::new(),
        server.url("/siteverify"),
        "test-secret".to_string(),
        Duration::from_millis(timeout_ms),
    )
}

fn notifier_for(url: String, timeout_ms: u64) -> Notifier {
    Notifier::new(Client::new(), url, Duration::from_millis(timeout_ms))
}

fn sample_submission() -> Submission {
    Submission::from_form(ContactForm {
        business_name: Some("Luna Cafe".to_string()),
        contact_name: Some("Priya".to_string()),
        email: Some("priya@luna.example".to_string()),
        phone: Some("555-0100".to_string()),
        business_type: Some("cafe".to_string()),
        message: Some("Looking for a demo.".to_string()),
        ..Default::default()
    })
}

// =============================================================================
// reCAPTCHA verification
// =============================================================================

#[tokio::test]
async fn captcha_passes_on_success_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/siteverify")
            .body_contains("secret=test-secret")
            .body_contains("response=tok-1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true}));
    });

    assert!(verifier_for(&server, 1000).verify("tok-1").await);
    mock.assert();
}

#[tokio::test]
async fn captcha_rejects_on_failure_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/siteverify");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": false,
                "error-codes": ["invalid-input-response"]
            }));
    });

    assert!(!verifier_for(&server, 1000).verify("tok-2").await);
    mock.assert();
}

#[tokio::test]
async fn captcha_empty_token_makes_no_outbound_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/siteverify");
        then.status(200)
            .json_body(serde_json::json!({"success": true}));
    });

    assert!(!verifier_for(&server, 1000).verify("").await);
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn captcha_fails_closed_on_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/siteverify");
        then.status(500);
    });

    assert!(!verifier_for(&server, 1000).verify("tok-3").await);
}

#[tokio::test]
async fn captcha_fails_closed_on_malformed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/siteverify");
        then.status(200).body("this is not json");
    });

    assert!(!verifier_for(&server, 1000).verify("tok-4").await);
}

#[tokio::test]
async fn captcha_fails_closed_on_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/siteverify");
        then.status(200)
            .json_body(serde_json::json!({"success": true}))
            .delay(Duration::from_millis(500));
    });

    assert!(!verifier_for(&server, 100).verify("tok-5").await);
}

// =============================================================================
// Discord webhook delivery
// =============================================================================

#[tokio::test]
async fn webhook_delivery_succeeds_on_204() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/hook")
            .header("Content-Type", "application/json")
            .body_contains("Kitchio Bot");
        then.status(204);
    });

    let payload = build_notification(&sample_submission());
    let result = notifier_for(server.url("/hook"), 1000).send(&payload).await;

    assert!(result.is_ok());
    mock.assert();
}

#[tokio::test]
async fn webhook_delivery_fails_on_non_204_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/hook");
        then.status(200);
    });

    let payload = build_notification(&sample_submission());
    let result = notifier_for(server.url("/hook"), 1000).send(&payload).await;

    assert!(matches!(result, Err(DeliveryError::Status(200))));
}

#[tokio::test]
async fn webhook_delivery_classifies_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/hook");
        then.status(204).delay(Duration::from_millis(500));
    });

    let payload = build_notification(&sample_submission());
    let result = notifier_for(server.url("/hook"), 100).send(&payload).await;

    assert!(matches!(result, Err(DeliveryError::Timeout)));
}

#[tokio::test]
async fn webhook_delivery_classifies_connection_failure() {
    // Nothing listens on port 1
    let payload = build_notification(&sample_submission());
    let result = notifier_for("http://127.0.0.1:1/hook".to_string(), 1000)
        .send(&payload)
        .await;

    assert!(matches!(result, Err(DeliveryError::Connect)));
}
