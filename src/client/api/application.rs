use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::SubmittedDto,
        application::ApplicationDto,
        question::QuestionDrawDto,
    },
};

/// Fetches a fresh random draw of questions.
pub async fn get_questions() -> Result<Vec<String>, ApiError> {
    let response = send_request(get("/api/questions")).await?;
    let draw: QuestionDrawDto = parse_response(response).await?;

    Ok(draw.questions)
}

/// Submits a completed application.
pub async fn submit_application(application: &ApplicationDto) -> Result<(), ApiError> {
    let body = serialize_json(application)?;
    let response = send_request(post("/api/application").body(body)).await?;
    let _: SubmittedDto = parse_response(response).await?;

    Ok(())
}
