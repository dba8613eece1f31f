use super::*;

/// Tests a valid application from a logged-in user is relayed once.
///
/// Verifies the webhook receives exactly one message mentioning both roles, with 15
/// embed fields and the session username in place of the submitted one.
///
/// Expected: 200 with `{status: "submitted"}`
#[tokio::test]
async fn relays_valid_application() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .post_json(
            "/api/application",
            Some(&cookie),
            &application_body("Jane_Doe"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "submitted"}));

    let requests = app.webhook.requests().await;
    assert_eq!(requests.len(), 1);

    let message = &requests[0];
    assert_eq!(message["username"], "GTA RP Applications");
    assert_eq!(
        message["content"],
        "<@&1429439768940253287> <@&1429439764163198998>"
    );
    assert_eq!(
        message["allowed_mentions"],
        json!({"parse": [], "roles": ["1429439768940253287", "1429439764163198998"]})
    );

    let embed = &message["embeds"][0];
    assert_eq!(embed["title"], "New Application — Jane_Doe");
    assert_eq!(embed["color"], 13690);

    let fields = embed["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 15);
    assert_eq!(fields[7], json!({"name": "discord", "value": "jane"}));
    assert_eq!(fields[14]["name"], "Question 7");
}

/// Tests submission requires a session.
///
/// Expected: 401 and no webhook call
#[tokio::test]
async fn requires_login() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/application", None, &application_body("Jane_Doe"))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "Not logged in"}));
    assert!(app.webhook.requests().await.is_empty());
}

/// Tests a malformed character name is rejected before relaying.
///
/// Expected: 400 with the format message and no webhook call
#[tokio::test]
async fn rejects_invalid_character_name() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for name in ["jane_doe", "Jane Doe", "JaneDoe", "Jane_Doe_Smith", "J_D"] {
        let response = app
            .post_json("/api/application", Some(&cookie), &application_body(name))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{name}");
        assert_eq!(
            json_body(response).await,
            json!({"error": "Character name must be in Firstname_Lastname format"})
        );
    }

    assert!(app.webhook.requests().await.is_empty());
}

/// Tests an application with too few answers is rejected.
///
/// Expected: 400 and no webhook call
#[tokio::test]
async fn rejects_missing_answers() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let mut body = application_body("Jane_Doe");
    body["answers"].as_array_mut().unwrap().pop();

    let response = app
        .post_json("/api/application", Some(&cookie), &body)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.webhook.requests().await.is_empty());
}

/// Tests a webhook error status is reported as a delivery failure.
///
/// Expected: 502 with the generic message after exactly one attempt
#[tokio::test]
async fn reports_webhook_rejection() {
    let app = TestApp::with_webhook_status(StatusCode::INTERNAL_SERVER_ERROR).await;
    let cookie = app.login().await;

    let response = app
        .post_json(
            "/api/application",
            Some(&cookie),
            &application_body("Jane_Doe"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Error submitting application"})
    );
    assert_eq!(app.webhook.requests().await.len(), 1);
}

/// Tests an unreachable webhook is reported as a delivery failure.
///
/// Expected: 502 with the generic message
#[tokio::test]
async fn reports_unreachable_webhook() {
    let app = TestApp::with_webhook_url("http://127.0.0.1:1/webhook").await;
    let cookie = app.login().await;

    let response = app
        .post_json(
            "/api/application",
            Some(&cookie),
            &application_body("Jane_Doe"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Error submitting application"})
    );
}

/// Tests each submission is relayed on its own, with no deduplication.
///
/// Expected: Two submissions produce two webhook calls
#[tokio::test]
async fn relays_every_submission() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for _ in 0..2 {
        let response = app
            .post_json(
                "/api/application",
                Some(&cookie),
                &application_body("Jane_Doe"),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(app.webhook.requests().await.len(), 2);
}
