//! Application state shared across all request handlers.
//!
//! The state is built once during startup from [`Config`](crate::server::config::Config)
//! and cloned into each handler through Axum's state extraction. It holds:
//! - The identity provider used for login
//! - The relay used to deliver applications

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::service::{auth::IdentityProvider, relay::SubmissionRelay};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the provider sits behind an `Arc` and the relay
/// shares its HTTP client and configuration.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider for the login flow.
    ///
    /// Discord in production; tests substitute their own implementation.
    pub identity_provider: Arc<dyn IdentityProvider>,

    /// Relay delivering accepted applications to the webhook.
    pub relay: SubmissionRelay,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `identity_provider` - Provider for login and callback handling
    /// - `relay` - Webhook relay for submitted applications
    pub fn new(identity_provider: Arc<dyn IdentityProvider>, relay: SubmissionRelay) -> Self {
        Self {
            identity_provider,
            relay,
        }
    }
}
