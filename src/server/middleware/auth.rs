use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

/// Guard for handlers that require a logged-in user.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the logged-in identity or fails with `AuthError::NotLoggedIn`.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Identity stored in the session
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No identity in the session (401)
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session store
    pub async fn require(&self) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    /// Tests the guard without an identity in the session.
    ///
    /// Expected: Err(AuthError::NotLoggedIn)
    #[tokio::test]
    async fn rejects_anonymous_session() {
        let test = TestContext::new();

        let result = AuthGuard::new(test.session()).require().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::NotLoggedIn))
        ));
    }

    /// Tests the guard returns the stored identity.
    ///
    /// Expected: Ok(SessionUser)
    #[tokio::test]
    async fn returns_stored_identity() -> Result<(), AppError> {
        let test = TestContext::new();
        let user = SessionUser {
            id: "123456789".to_string(),
            username: "jane".to_string(),
            avatar: None,
        };
        AuthSession::new(test.session()).set_user(&user).await?;

        let result = AuthGuard::new(test.session()).require().await?;

        assert_eq!(result, user);
        Ok(())
    }
}
