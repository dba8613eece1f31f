//! Delivery of applications to the Discord webhook.
//!
//! A relay is a single POST with no retry. A transport error or a non-success status is
//! reported to the caller and the submission is not kept anywhere.

use chrono::{SecondsFormat, Utc};
use dioxus_logger::tracing;
use serenity::model::mention::Mentionable;
use std::sync::Arc;

use crate::{
    model::application::ApplicationDto,
    server::{
        config::RelayConfig,
        error::relay::RelayError,
        model::webhook::{AllowedMentions, EmbedField, WebhookEmbed, WebhookMessage},
    },
};

/// Embed accent colour.
const EMBED_COLOR: u32 = 13690;
/// Shown for any field left empty.
const EMPTY_FIELD_PLACEHOLDER: &str = "—";
/// Discord rejects embed field values longer than this many characters.
const MAX_FIELD_VALUE_CHARS: usize = 1024;
/// Discord rejects embed titles longer than this many characters.
const MAX_TITLE_CHARS: usize = 256;
/// Discord rejects embeds whose title, field names and field values add up to more
/// than this many characters.
const MAX_EMBED_CHARS: usize = 6000;

/// Sends applications to the configured webhook.
///
/// Cheap to clone; the HTTP client and configuration are shared.
#[derive(Clone)]
pub struct SubmissionRelay {
    http_client: reqwest::Client,
    config: Arc<RelayConfig>,
}

impl SubmissionRelay {
    /// Creates a relay for the given webhook configuration.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client used for the webhook POST
    /// - `config` - Webhook URL, roles to mention and sender label
    pub fn new(http_client: reqwest::Client, config: RelayConfig) -> Self {
        Self {
            http_client,
            config: Arc::new(config),
        }
    }

    /// Builds the webhook message for an application.
    ///
    /// The embed carries one field per form value in form order, followed by
    /// `Question N` fields formatted as `"{question} — {answer}"`.
    pub fn build_message(&self, application: &ApplicationDto) -> WebhookMessage {
        let role_ids = &self.config.role_ids;

        let title = truncate(
            &format!("New Application — {}", application.char_name),
            MAX_TITLE_CHARS,
        );
        let mut fields = embed_fields(application);
        fit_embed_limit(&title, &mut fields);

        WebhookMessage {
            username: self.config.username.clone(),
            content: role_ids
                .iter()
                .map(|role| role.mention().to_string())
                .collect::<Vec<_>>()
                .join(" "),
            embeds: vec![WebhookEmbed {
                title,
                color: EMBED_COLOR,
                fields,
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            }],
            allowed_mentions: AllowedMentions {
                parse: Vec::new(),
                roles: role_ids.iter().map(|role| role.get().to_string()).collect(),
            },
        }
    }

    /// Posts an application to the webhook exactly once.
    ///
    /// # Returns
    /// - `Ok(())` - Webhook answered with a success status
    /// - `Err(RelayError::Request)` - No response was received
    /// - `Err(RelayError::Rejected)` - Webhook answered with a non-success status
    pub async fn relay(&self, application: &ApplicationDto) -> Result<(), RelayError> {
        let message = self.build_message(application);

        let response = self
            .http_client
            .post(self.config.webhook_url.clone())
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }

        tracing::info!(
            "Relayed application for {} ({} fields)",
            application.char_name,
            message.embeds.iter().map(|e| e.fields.len()).sum::<usize>()
        );

        Ok(())
    }
}

/// Lists every collected key/value of an application as embed fields.
fn embed_fields(application: &ApplicationDto) -> Vec<EmbedField> {
    let form_fields = [
        ("realName", application.real_name.as_str()),
        ("dob", application.dob.as_str()),
        ("charName", application.char_name.as_str()),
        ("storyline", application.storyline.as_str()),
        ("readRules", application.read_rules.as_str()),
        ("charGender", application.char_gender.as_str()),
        ("rpYears", application.rp_years.as_str()),
        ("discord", application.discord.as_str()),
    ]
    .into_iter()
    .map(|(name, value)| field(name.to_string(), value));

    let question_fields = application
        .answers
        .iter()
        .enumerate()
        .map(|(index, qa)| {
            field(
                format!("Question {}", index + 1),
                &format!("{} — {}", qa.question, qa.answer),
            )
        });

    form_fields.chain(question_fields).collect()
}

fn field(name: String, value: &str) -> EmbedField {
    let value = if value.trim().is_empty() {
        EMPTY_FIELD_PLACEHOLDER.to_string()
    } else {
        truncate(value, MAX_FIELD_VALUE_CHARS)
    };

    EmbedField { name, value }
}

/// Shortens the longest field values until the embed fits [`MAX_EMBED_CHARS`].
///
/// All values longer than a common cap are cut to that cap, with the cap chosen as high
/// as the limit allows. Short values are never touched, so in practice only the
/// storyline and the longer answers lose text.
fn fit_embed_limit(title: &str, fields: &mut [EmbedField]) {
    let fixed_chars = title.chars().count()
        + fields.iter().map(|f| f.name.chars().count()).sum::<usize>();
    let budget = MAX_EMBED_CHARS.saturating_sub(fixed_chars);

    let lengths: Vec<usize> = fields.iter().map(|f| f.value.chars().count()).collect();
    if lengths.iter().sum::<usize>() <= budget {
        return;
    }

    let cap = value_cap(lengths, budget).max(1);
    for field in fields.iter_mut() {
        field.value = truncate(&field.value, cap);
    }
}

/// Largest cap such that the values, each cut to at most the cap, add up to `budget`
/// characters or fewer.
fn value_cap(mut lengths: Vec<usize>, budget: usize) -> usize {
    lengths.sort_unstable();

    let mut remaining = budget;
    let mut uncapped = lengths.len();
    for length in lengths {
        if length * uncapped <= remaining {
            remaining -= length;
            uncapped -= 1;
        } else {
            return remaining / uncapped;
        }
    }

    usize::MAX
}

/// Cuts `value` down to at most `max` characters, ending in an ellipsis when cut.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }

    let mut truncated: String = value.chars().take(max - 1).collect();
    truncated.push('…');
    truncated
}
