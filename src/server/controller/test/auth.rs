use super::*;

/// Tests login redirects to the provider and opens a session.
///
/// Expected: 307 to the provider URL with a session cookie set
#[tokio::test]
async fn login_redirects_to_provider() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response),
        Some("https://discord.test/oauth2/authorize?state=test-state")
    );
    assert!(session_cookie(&response).is_some());
}

/// Tests a callback with the stored state and a valid code logs the user in.
///
/// Expected: 303 to `/`, then `/user` returns the identity
#[tokio::test]
async fn callback_logs_user_in() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .get("/callback?code=valid-code&state=test-state", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));

    let new_cookie = session_cookie(&response).unwrap();
    assert_ne!(new_cookie, cookie);

    let response = app.get("/user", Some(&new_cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests the session ID is replaced on login.
///
/// Expected: The pre-login cookie no longer identifies a session
#[tokio::test]
async fn callback_cycles_session_id() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;
    let pre_login_cookie = session_cookie(&response).unwrap();

    app.get(
        "/callback?code=valid-code&state=test-state",
        Some(&pre_login_cookie),
    )
    .await;

    let response = app.get("/user", Some(&pre_login_cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests a callback whose state does not match is rejected.
///
/// Expected: 303 to `/` with no identity stored
#[tokio::test]
async fn callback_with_wrong_state_does_not_log_in() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .get("/callback?code=valid-code&state=forged", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));

    let cookie = session_cookie(&response).unwrap_or(cookie);
    let response = app.get("/user", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests a callback without a prior login has no state to match.
///
/// Expected: 303 to `/`
#[tokio::test]
async fn callback_without_login_does_not_log_in() {
    let app = TestApp::new().await;

    let response = app
        .get("/callback?code=valid-code&state=test-state", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
}

/// Tests a provider failure leaves the user logged out.
///
/// Expected: 303 to `/`, `/user` still 401
#[tokio::test]
async fn callback_with_rejected_code_does_not_log_in() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;
    let cookie = session_cookie(&response).unwrap();

    let response = app
        .get("/callback?code=bad-code&state=test-state", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = session_cookie(&response).unwrap_or(cookie);
    let response = app.get("/user", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests a callback without a code, as sent when the user denies consent.
///
/// Expected: 303 to `/` with no identity stored
#[tokio::test]
async fn callback_without_code_does_not_log_in() {
    let app = TestApp::new().await;

    let response = app.get("/login", None).await;
    let cookie = session_cookie(&response).unwrap();

    let response = app.get("/callback?state=test-state", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = session_cookie(&response).unwrap_or(cookie);
    let response = app.get("/user", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests logout removes the identity.
///
/// Expected: 303 to `/`, then `/user` returns 401
#[tokio::test]
async fn logout_clears_identity() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app.get("/logout", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));

    let response = app.get("/user", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests logout without a session still redirects home.
///
/// Expected: 303 to `/`
#[tokio::test]
async fn logout_without_session_redirects() {
    let app = TestApp::new().await;

    let response = app.get("/logout", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
}
