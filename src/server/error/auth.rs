use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

const NOT_LOGGED_IN_MESSAGE: &str = "Not logged in";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated identity in the session.
    ///
    /// Results in a 401 Unauthorized response with the "Not logged in" message the web
    /// client uses to redirect home.
    #[error("{}", NOT_LOGGED_IN_MESSAGE)]
    NotLoggedIn,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord redirected back without an authorization code, usually because the user
    /// denied the consent screen.
    #[error("OAuth callback did not include an authorization code")]
    MissingAuthorizationCode,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant leaves the caller without an identity and becomes a 401 Unauthorized
/// with "Not logged in". Login flow failures are normally handled by the callback
/// before a response is built.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: NOT_LOGGED_IN_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
