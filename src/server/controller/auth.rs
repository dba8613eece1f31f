use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both are optional so a callback missing either still reaches the handler and ends
/// in the usual redirect home instead of a rejection.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

/// GET /login - Start the Discord login flow
///
/// Stores a fresh CSRF state in the session and redirects to Discord's authorization
/// page with the `identify` scope.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Discord authorization URL
/// - `500 Internal Server Error` - Session store failure
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (url, csrf_token) = state.identity_provider.begin_auth();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /callback - Complete the Discord login flow
///
/// Always redirects to `/`. On success the session ID is cycled and the identity
/// stored; any failure is logged and leaves the session without an identity.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    if let Err(e) = complete_login(&state, &session, params).await {
        tracing::warn!("Login failed: {}", e);
    }

    Redirect::to("/")
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<(), AppError> {
    validate_csrf(session, params.state.as_deref()).await?;

    let code = params.code.ok_or(AuthError::MissingAuthorizationCode)?;
    let user = state.identity_provider.complete_auth(code).await?;

    let auth_session = AuthSession::new(session);
    auth_session.cycle_id().await?;
    auth_session.set_user(&user).await?;

    tracing::info!("User {} ({}) logged in", user.username, user.id);

    Ok(())
}

/// Consumes the stored CSRF token and compares it with the callback state.
async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}

/// GET /logout - Log out the current user
///
/// Deletes the session and its cookie, then redirects to `/`. Works without a session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Redirect::to("/"))
}
