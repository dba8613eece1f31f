use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Session state shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked the session yet
    Initializing,
    /// User is logged in
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check the session
    Error(ApiError),
}

impl From<Result<Option<UserDto>, ApiError>> for AuthState {
    fn from(result: Result<Option<UserDto>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => AuthState::Authenticated(user),
            Ok(None) => AuthState::NotLoggedIn,
            Err(e) => AuthState::Error(e),
        }
    }
}

impl AuthState {
    /// Whether the session check has finished, successfully or not
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    /// Get the logged-in user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
