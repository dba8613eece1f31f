//! Router-level tests driving the full middleware stack with `oneshot` requests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use oauth2::CsrfToken;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use test_utils::webhook::MockWebhook;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::user::SessionUser,
    service::{auth::IdentityProvider, question::QuestionService, relay::SubmissionRelay},
    startup,
    state::AppState,
};

mod application;
mod auth;
mod question;

/// CSRF state the fake provider hands out on every login.
const TEST_STATE: &str = "test-state";
/// The only authorization code the fake provider accepts.
const VALID_CODE: &str = "valid-code";

/// Allowed CORS origin of the production test app.
const PRODUCTION_FRONTEND_URL: &str = "https://apply.example.com";

const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"main\"></div></body></html>";

/// Identity provider that never leaves the process.
struct FakeIdentityProvider;

fn test_user() -> SessionUser {
    SessionUser {
        id: "80351110224678912".to_string(),
        username: "jane".to_string(),
        avatar: Some("8342729096ea3675442027381ff50dfe".to_string()),
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn begin_auth(&self) -> (Url, CsrfToken) {
        let url = Url::parse("https://discord.test/oauth2/authorize?state=test-state")
            .expect("valid test url");

        (url, CsrfToken::new(TEST_STATE.to_string()))
    }

    async fn complete_auth(&self, authorization_code: String) -> Result<SessionUser, AppError> {
        if authorization_code == VALID_CODE {
            Ok(test_user())
        } else {
            Err(AuthError::TokenExchange("invalid_grant".to_string()).into())
        }
    }
}

/// Fully assembled application with a mock webhook and a temporary static directory.
struct TestApp {
    router: Router,
    webhook: MockWebhook,
    _static_dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_webhook_status(StatusCode::NO_CONTENT).await
    }

    async fn with_webhook_status(status: StatusCode) -> Self {
        let webhook = MockWebhook::start(status).await;
        let webhook_url = webhook.url.clone();

        Self::build(webhook, webhook_url, false)
    }

    /// Builds an app configured the way it runs in production.
    async fn production() -> Self {
        let webhook = MockWebhook::start(StatusCode::NO_CONTENT).await;
        let webhook_url = webhook.url.clone();

        Self::build(webhook, webhook_url, true)
    }

    /// Builds an app whose relay points at `webhook_url` instead of the mock.
    async fn with_webhook_url(webhook_url: &str) -> Self {
        let webhook = MockWebhook::start(StatusCode::NO_CONTENT).await;

        Self::build(webhook, webhook_url.to_string(), false)
    }

    fn build(webhook: MockWebhook, webhook_url: String, production: bool) -> Self {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(static_dir.path().join("main.css"), "body { margin: 0; }").unwrap();

        let mut config = Config::from_lookup(|key| match key {
            "DISCORD_WEBHOOK_URL" => Some(webhook_url.clone()),
            "DISCORD_MENTION_ROLE_IDS" => Some("1429439768940253287,1429439764163198998".to_string()),
            "NODE_ENV" if production => Some("production".to_string()),
            "SESSION_SECRET" if production => Some("production-test-secret".to_string()),
            "DISCORD_CLIENT_ID" if production => Some("1234567890".to_string()),
            "DISCORD_CLIENT_SECRET" if production => Some("client-secret".to_string()),
            "FRONTEND_URL" if production => Some(PRODUCTION_FRONTEND_URL.to_string()),
            _ => None,
        })
        .unwrap();
        config.static_dir = static_dir.path().to_path_buf();

        let relay = SubmissionRelay::new(reqwest::Client::new(), config.relay.clone());
        let state = AppState::new(Arc::new(FakeIdentityProvider), relay);
        let router = startup::build_app(&config, state).unwrap();

        Self {
            router,
            webhook,
            _static_dir: static_dir,
        }
    }

    async fn request(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        self.request(request.body(Body::empty()).unwrap()).await
    }

    async fn post_json(&self, uri: &str, cookie: Option<&str>, body: &Value) -> Response {
        let mut request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        self.request(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Runs the login flow through the router and returns the authenticated cookie.
    async fn login(&self) -> String {
        let response = self.get("/login", None).await;
        let cookie = session_cookie(&response).expect("login sets a session cookie");

        let response = self
            .get(
                &format!("/callback?code={}&state={}", VALID_CODE, TEST_STATE),
                Some(&cookie),
            )
            .await;

        session_cookie(&response).expect("callback issues a new session cookie")
    }
}

/// Full `Set-Cookie` header of the session cookie, attributes included.
fn session_set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("sessionId="))
        .map(str::to_string)
}

/// Extracts `sessionId=...` from the response's `Set-Cookie` header.
fn session_cookie(response: &Response) -> Option<String> {
    session_set_cookie(response)
        .and_then(|value| value.split(';').next().map(str::to_string))
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A complete, valid application answering a real question draw.
fn application_body(char_name: &str) -> Value {
    let answers: Vec<Value> = QuestionService::draw(&mut StdRng::seed_from_u64(11))
        .into_iter()
        .map(|question| json!({"question": question, "answer": "Some answer"}))
        .collect();

    json!({
        "realName": "Jane",
        "dob": "1999-01-01",
        "charName": char_name,
        "storyline": "Arrived on the last train into the city.",
        "readRules": "Yes",
        "charGender": "Female",
        "rpYears": "3",
        "discord": "not-jane",
        "answers": answers,
    })
}
