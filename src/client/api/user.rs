use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Checks the session.
///
/// # Returns
/// - `Ok(Some(UserDto))` - Logged in
/// - `Ok(None)` - No session (401)
/// - `Err(ApiError)` - Request failed for any other reason
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/user")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}
