//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - Authenticated Discord identity
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

use crate::server::{error::AppError, model::user::SessionUser};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Lifetime of a logged-in session, counted from login.
const SESSION_LIFETIME: Duration = Duration::hours(24);

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated identity and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's identity in the session.
    ///
    /// Called after successful authentication to establish a logged-in session. The
    /// session expires 24 hours after this call regardless of activity.
    ///
    /// # Arguments
    /// - `user` - Identity returned by the identity provider
    ///
    /// # Returns
    /// - `Ok(())` - Identity successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        self.session
            .set_expiry(Some(Expiry::AtDateTime(OffsetDateTime::now_utc() + SESSION_LIFETIME)));
        Ok(())
    }

    /// Retrieves the logged-in identity from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.session.get::<SessionUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Issues a new session ID while keeping the session data.
    ///
    /// Called right before storing the identity so a session ID obtained before
    /// login cannot be used to ride the authenticated session.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Deletes the session from the store and expires the cookie.
    ///
    /// Used during logout.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// Used during OAuth flow initiation to store a random token that will
    /// be validated during the callback to prevent CSRF attacks.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
