//! HTTP request handlers.
//!
//! Controllers extract the request, check the session where required, call into the
//! service layer and convert the outcome into a response. Errors are returned as
//! [`AppError`](crate::server::error::AppError) and mapped to status codes there.

pub mod application;
pub mod auth;
pub mod health;
pub mod question;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Fallback for any path that is neither a route nor a static file.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
