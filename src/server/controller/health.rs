use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};

use crate::model::api::HealthDto;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}
