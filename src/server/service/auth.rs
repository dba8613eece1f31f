//! Discord OAuth2 login behind a provider-agnostic interface.
//!
//! Handlers only see [`IdentityProvider`]: it produces the authorization redirect and
//! turns a callback code into a [`SessionUser`]. [`DiscordIdentityProvider`] is the one
//! concrete implementation.

use async_trait::async_trait;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serenity::model::user::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::SessionUser,
    state::OAuth2Client,
};

/// External identity provider used to authenticate users.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Builds the authorization URL to redirect the browser to, along with the CSRF
    /// state token that must come back on the callback.
    fn begin_auth(&self) -> (Url, CsrfToken);

    /// Exchanges an authorization code for the authenticated identity.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider's callback redirect
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Identity of the user who approved the login
    /// - `Err(AppError)` - Code exchange or profile lookup failed
    async fn complete_auth(&self, authorization_code: String) -> Result<SessionUser, AppError>;
}

/// Discord OAuth2 implementation of [`IdentityProvider`].
///
/// Requests only the `identify` scope, which is enough to read the user's ID,
/// username and avatar.
pub struct DiscordIdentityProvider {
    /// HTTP client for Discord API requests.
    http_client: reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    oauth_client: OAuth2Client,
    /// Discord `users/@me` endpoint.
    user_url: String,
}

impl DiscordIdentityProvider {
    /// Creates a new DiscordIdentityProvider instance.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client used for the token exchange and profile lookup;
    ///   must not follow redirects
    /// - `oauth_client` - Configured OAuth2 client
    /// - `user_url` - Discord `users/@me` endpoint
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client, user_url: String) -> Self {
        Self {
            http_client,
            oauth_client,
            user_url,
        }
    }

    /// Retrieves a Discord user's information using provided access token.
    ///
    /// Fetches the authenticated user's Discord profile data including their ID, username,
    /// and avatar. Uses the Discord API's "@me" endpoint.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - Successfully retrieved user information
    /// - `Err(AppError::ReqwestErr)` - HTTP request failed, returned an error status,
    ///   or the response could not be parsed
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(&self.user_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}

#[async_trait]
impl IdentityProvider for DiscordIdentityProvider {
    fn begin_auth(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    async fn complete_auth(&self, authorization_code: String) -> Result<SessionUser, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;

        Ok(SessionUser::from_discord(user))
    }
}
