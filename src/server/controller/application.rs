use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::SubmittedDto, application::ApplicationDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::application::ApplicationService,
        state::AppState,
    },
};

/// POST /api/application - Submit an application
///
/// Validates the form and relays it to the Discord webhook with one request. The
/// `discord` field is replaced with the logged-in user's username.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - `{status: "submitted"}`, the webhook accepted the message
/// - `400 Bad Request` - Application failed validation
/// - `401 Unauthorized` - No identity in the session
/// - `502 Bad Gateway` - Webhook unreachable or refused the message
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require().await?;

    ApplicationService::new(&state.relay)
        .submit(&user, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SubmittedDto {
            status: "submitted".to_string(),
        }),
    ))
}
