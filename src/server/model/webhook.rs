//! Discord webhook execute payload.
//!
//! Only the subset of the execute-webhook body this application sends is modelled.

use serde::Serialize;

/// Body of a `POST` to a Discord webhook URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    /// Sender name shown instead of the webhook's default name.
    pub username: String,
    /// Plain message text, carrying the role mentions.
    pub content: String,
    pub embeds: Vec<WebhookEmbed>,
    pub allowed_mentions: AllowedMentions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookEmbed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    /// ISO 8601 timestamp shown in the embed footer.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

/// Restricts which mentions in `content` actually notify anyone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllowedMentions {
    /// Mention types parsed from content; left empty so only listed roles ping.
    pub parse: Vec<String>,
    /// Role IDs allowed to be pinged.
    pub roles: Vec<String>,
}
