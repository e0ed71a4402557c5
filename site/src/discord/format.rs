//! Discord embed formatting for contact submissions.

use chrono::Utc;
use serde::Serialize;

use crate::submission::Submission;

/// Discord caps embed field values at 1024 characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Role mentioned in the message content so the sales team gets pinged.
const MENTION_ROLE: &str = "<@&1466201998398459978>";

/// Blue accent for the embed sidebar.
const EMBED_COLOR: u32 = 3_447_003;

// =============================================================================
// Payload Types
// =============================================================================

/// Top-level webhook payload.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    /// Mention string rendered above the embed
    pub content: String,
    /// Discord expects an array even for a single embed
    pub embeds: Vec<Embed>,
    /// Display name of the posting bot
    pub username: String,
}

/// A single rich embed.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    /// ISO-8601 timestamp rendered natively by the Discord client
    pub timestamp: String,
}

/// A named field inside an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn inline(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            inline: true,
        }
    }
}

/// Embed footer label.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

// =============================================================================
// Formatting
// =============================================================================

/// Render a submission into the payload posted to the Discord webhook.
///
/// The message field is omitted when the visitor left it blank and truncated
/// to [`FIELD_VALUE_LIMIT`] characters otherwise.
pub fn build_notification(submission: &Submission) -> WebhookPayload {
    let now = Utc::now();

    let mut fields = vec![
        EmbedField::inline("👤 Contact Name", &submission.contact_name),
        EmbedField::inline("🏢 Business Name", &submission.business_name),
        EmbedField::inline("📧 Email", &submission.email),
        EmbedField::inline("📞 Phone", &submission.phone),
        EmbedField::inline(
            "🏪 Business Type",
            &display_business_type(&submission.business_type),
        ),
        EmbedField::inline(
            "📅 Submitted At",
            &format!("{} GMT", now.format("%d/%m/%Y %H:%M:%S")),
        ),
    ];

    if !submission.message.trim().is_empty() {
        fields.push(EmbedField {
            name: "💬 Message".to_string(),
            value: truncate_chars(&submission.message, FIELD_VALUE_LIMIT),
            inline: false,
        });
    }

    WebhookPayload {
        content: MENTION_ROLE.to_string(),
        embeds: vec![Embed {
            title: "🆕 New Contact Form Submission".to_string(),
            description: "A new potential customer has reached out!".to_string(),
            color: EMBED_COLOR,
            fields,
            footer: EmbedFooter {
                text: "Kitchio Contact Form".to_string(),
            },
            timestamp: now.to_rfc3339(),
        }],
        username: "Kitchio Bot".to_string(),
    }
}

/// Turn a raw form value like `fine_dining` into `Fine Dining`.
pub fn display_business_type(raw: &str) -> String {
    raw.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Truncate by character count, never splitting a UTF-8 sequence.
fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
