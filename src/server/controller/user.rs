use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::auth::AuthGuard};

/// GET /user - Get the logged-in user
///
/// # Returns
/// - `200 OK` - `UserDto` with the username, ID and avatar hash
/// - `401 Unauthorized` - No identity in the session
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
