//! Development-only error detail exposure.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};

use crate::{model::api::ErrorDto, server::error::ErrorDetail};

/// Replaces the generic 500 body with the underlying error message.
///
/// Only installed when running in development; production responses keep the
/// generic "Internal server error" message.
pub async fn expose_error_detail(response: Response) -> Response {
    if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (parts, _) = response.into_parts();
    let mut detailed = (parts.status, Json(ErrorDto { error: detail })).into_response();
    *detailed.extensions_mut() = parts.extensions;

    detailed
}
