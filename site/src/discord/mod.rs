//! Discord notification module.
//!
//! Renders contact submissions into rich embeds and delivers them to the
//! team's notification webhook.
//!
//! ```text
//! Submission → build_notification() → WebhookPayload → Notifier::send()
//! ```

pub mod format;
pub mod send;

pub use format::{
    build_notification, display_business_type, Embed, EmbedField, EmbedFooter, WebhookPayload,
    FIELD_VALUE_LIMIT,
};
pub use send::{DeliveryError, Notifier};
