//! Environment-driven application configuration.
//!
//! Configuration is read once at startup into [`Config`] and handed explicitly to the
//! components that need it. Nothing reads the environment after startup.

use dioxus_logger::tracing;
use serenity::model::id::RoleId;
use std::path::PathBuf;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_WEBHOOK_USERNAME: &str = "GTA RP Applications";
const DEVELOPMENT_SESSION_SECRET: &str = "dev-secret-key";

/// Number of roles mentioned on every relayed application.
pub const MENTION_ROLE_COUNT: usize = 2;

/// Deployment environment, selected by `NODE_ENV` (or `APP_ENV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than `production` is treated as development.
    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Settings for delivering applications to the Discord webhook.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Webhook endpoint every application is POSTed to.
    pub webhook_url: Url,
    /// Roles mentioned in the message content.
    pub role_ids: [RoleId; MENTION_ROLE_COUNT],
    /// Sender label shown on the webhook message.
    pub username: String,
}

pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_user_url: String,

    pub frontend_url: String,
    pub session_secret: String,
    pub static_dir: PathBuf,

    pub relay: RelayConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve variable names.
    ///
    /// Empty values are treated as unset. Production refuses to start without a
    /// session secret or Discord OAuth credentials; development substitutes defaults
    /// and logs what is missing.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment =
            Environment::from_value(var("NODE_ENV").or_else(|| var("APP_ENV")).as_deref());

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let frontend_url = var("FRONTEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        let session_secret = match var("SESSION_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(ConfigError::MissingEnvVar("SESSION_SECRET".to_string()).into())
            }
            None => DEVELOPMENT_SESSION_SECRET.to_string(),
        };

        let discord_client_id = discord_credential(&var, environment, "DISCORD_CLIENT_ID")?;
        let discord_client_secret =
            discord_credential(&var, environment, "DISCORD_CLIENT_SECRET")?;

        Ok(Self {
            environment,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            discord_client_id,
            discord_client_secret,
            discord_redirect_url: var("REDIRECT_URI")
                .unwrap_or_else(|| format!("{}/callback", frontend_url)),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_user_url: DISCORD_USER_URL.to_string(),
            frontend_url,
            session_secret,
            static_dir: PathBuf::from(
                var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            relay: RelayConfig {
                webhook_url: parse_webhook_url(var("DISCORD_WEBHOOK_URL"))?,
                role_ids: parse_role_ids(var("DISCORD_MENTION_ROLE_IDS"))?,
                username: var("WEBHOOK_USERNAME")
                    .unwrap_or_else(|| DEFAULT_WEBHOOK_USERNAME.to_string()),
            },
        })
    }
}

/// Resolves a Discord OAuth credential, which is only mandatory in production.
fn discord_credential<F>(var: &F, environment: Environment, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => Ok(value),
        None if environment.is_production() => {
            Err(ConfigError::MissingEnvVar(name.to_string()).into())
        }
        None => {
            tracing::error!(
                "{} is not set, Discord login will not work until it is configured",
                name
            );
            Ok(String::new())
        }
    }
}

fn parse_webhook_url(value: Option<String>) -> Result<Url, AppError> {
    let value =
        value.ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_WEBHOOK_URL".to_string()))?;

    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: "DISCORD_WEBHOOK_URL".to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    Ok(url)
}

/// Parses the comma separated list of role ids to mention.
///
/// Exactly [`MENTION_ROLE_COUNT`] non-zero ids are required.
fn parse_role_ids(value: Option<String>) -> Result<[RoleId; MENTION_ROLE_COUNT], AppError> {
    const NAME: &str = "DISCORD_MENTION_ROLE_IDS";

    let value = value.ok_or_else(|| ConfigError::MissingEnvVar(NAME.to_string()))?;
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: NAME.to_string(),
        value: value.clone(),
        reason,
    };

    let ids = value
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<u64>() {
                Ok(0) => Err(invalid("role id must be non-zero".to_string())),
                Ok(id) => Ok(RoleId::new(id)),
                Err(e) => Err(invalid(format!("'{}' is not a role id: {}", part, e))),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ids: [RoleId; MENTION_ROLE_COUNT] = ids.try_into().map_err(|ids: Vec<RoleId>| {
        invalid(format!(
            "expected {} role ids, got {}",
            MENTION_ROLE_COUNT,
            ids.len()
        ))
    })?;

    Ok(ids)
}
