//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod relay;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, application::ValidationError},
    server::error::{auth::AuthError, config::ConfigError, relay::RelayError},
};

/// Generic message returned for every unexpected server-side failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Generic message returned when an application could not be delivered.
pub const RELAY_FAILED_MESSAGE: &str = "Error submitting application";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Submitted application failed validation.
    ///
    /// Results in 400 Bad Request carrying the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Application could not be delivered to the webhook.
    ///
    /// Results in 502 Bad Gateway with a generic message; details are logged.
    #[error(transparent)]
    RelayErr(#[from] RelayError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, typically binding the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Detail of a 500 response that was replaced by the generic message.
///
/// Attached as a response extension so the development-only
/// [`expose_error_detail`](crate::server::middleware::error::expose_error_detail)
/// middleware can put it back into the body.
#[derive(Clone, Debug)]
pub struct ErrorDetail(pub String);

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 502 Bad Gateway - For `RelayErr`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::RelayErr(err) => {
                tracing::error!("Application relay failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: RELAY_FAILED_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message and records it as an [`ErrorDetail`] extension, but
/// returns a generic error message to the client.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::error!("{}", detail);

        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(ErrorDetail(detail));

        response
    }
}
