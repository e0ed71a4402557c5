//! Kitchio Site - marketing pages with a Discord-notified contact form.
//!
//! This library backs the single `kitchio-web` binary, which serves:
//! - Five static marketing pages (home, solutions, pricing, about, support)
//! - `POST /contact`: the support-page form, gated by reCAPTCHA
//! - `POST /submit-contact`: a JSON API for the same submission pipeline
//!
//! ## Request flow
//!
//! ```text
//! Form POST /contact        → reCAPTCHA gate → Submission → embed → Discord webhook
//! JSON POST /submit-contact → email check    → Submission → embed → Discord webhook
//! ```
//!
//! Submissions are transient: normalized, rendered, sent once, dropped.
//! Nothing is persisted and no delivery is retried.

pub mod captcha;
pub mod config;
pub mod discord;
pub mod submission;
pub mod web;

// Re-export commonly used types
pub use captcha::CaptchaVerifier;
pub use config::{Config, ConfigError};
pub use discord::{build_notification, DeliveryError, Notifier, WebhookPayload};
pub use submission::{dispatch, DispatchReceipt, Submission};
pub use web::AppState;
