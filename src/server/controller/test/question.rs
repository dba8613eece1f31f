use super::*;
use crate::model::question::QuestionDrawDto;

/// Tests a draw is served without a session.
///
/// Expected: 200 with 7 distinct pool questions
#[tokio::test]
async fn serves_a_full_draw() {
    let app = TestApp::new().await;

    let response = app.get("/api/questions", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let draw: QuestionDrawDto = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(draw.questions.len(), 7);
    assert!(draw
        .questions
        .iter()
        .all(|q| QuestionService::pool_of(q).is_some()));
}
