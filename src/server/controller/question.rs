use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{model::question::QuestionDrawDto, server::service::question::QuestionService};

/// GET /api/questions - Draw a fresh set of application questions
///
/// Every call returns a new random draw; nothing about it is remembered.
pub async fn get_questions() -> impl IntoResponse {
    let questions = QuestionService::draw(&mut rand::rng());

    (StatusCode::OK, Json(QuestionDrawDto { questions }))
}
