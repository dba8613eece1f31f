//! Server initialization.
//!
//! Builds the HTTP clients, identity provider, session layer and middleware stack from
//! [`Config`], then serves the router until Ctrl+C.

use axum::{
    http::{
        header::{
            AUTHORIZATION, CONTENT_TYPE, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    Json, Router,
};
use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sha2::{Digest, Sha512};
use std::{any::Any, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        error::{config::ConfigError, AppError, INTERNAL_SERVER_ERROR_MESSAGE},
        middleware::error::expose_error_detail,
        router,
        service::{auth::DiscordIdentityProvider, relay::SubmissionRelay},
        state::{AppState, OAuth2Client},
    },
};

/// Name of the session cookie.
const SESSION_COOKIE_NAME: &str = "sessionId";
/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_HOURS: i64 = 24;

/// Entry point of the server binary.
///
/// Loads `.env`, initializes logging and runs the server on a multi-threaded runtime.
/// Exits the process with status 1 if startup fails.
pub fn run() {
    dotenvy::dotenv().ok();
    init_tracing();

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::from)
        .and_then(|runtime| runtime.block_on(serve()));

    if let Err(e) = result {
        tracing::error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the application from the environment and serves it until shutdown.
async fn serve() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let http_client = setup_reqwest_client()?;
    let oauth_client = setup_oauth_client(&config)?;

    let identity_provider = DiscordIdentityProvider::new(
        http_client.clone(),
        oauth_client,
        config.discord_user_url.clone(),
    );
    let relay = SubmissionRelay::new(http_client, config.relay.clone());

    let state = AppState::new(Arc::new(identity_provider), relay);
    let app = build_app(&config, state)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!(
        "Server running on {} in {} mode",
        listener.local_addr()?,
        config.environment.as_str()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Creates the HTTP client used for Discord API and webhook requests.
///
/// Redirects are disabled so a compromised or misconfigured endpoint cannot bounce
/// requests to internal addresses.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the OAuth2 client for Discord login.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - One of the URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url = |name: &str, value: &str| {
        let name = name.to_string();
        let value = value.to_string();
        move |e: oauth2::url::ParseError| ConfigError::InvalidEnvVar {
            name,
            value,
            reason: e.to_string(),
        }
    };

    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(invalid_url("DISCORD_AUTH_URL", &config.discord_auth_url))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(invalid_url("DISCORD_TOKEN_URL", &config.discord_token_url))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(invalid_url("REDIRECT_URI", &config.discord_redirect_url))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Assembles the router with sessions, CORS and the environment-specific middleware.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared handler state
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `FRONTEND_URL` is not a valid origin
pub fn build_app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let is_production = config.environment.is_production();

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_http_only(true)
        .with_secure(is_production)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(
            SESSION_INACTIVITY_HOURS,
        )))
        .with_signed(session_key(&config.session_secret));

    let mut app = router::router(&config.static_dir)
        .with_state(state)
        .layer(session_layer)
        .layer(cors_layer(config)?);

    if is_production {
        app = app
            .layer(SetResponseHeaderLayer::if_not_present(
                X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                STRICT_TRANSPORT_SECURITY,
                HeaderValue::from_static("max-age=15552000; includeSubDomains"),
            ));
    } else {
        app = app.layer(axum::middleware::map_response(expose_error_detail));
    }

    let app = app
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            panic_response(panic, is_production)
        }))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Derives the 64-byte cookie signing key from the configured session secret.
fn session_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let allow_origin = if config.environment.is_production() {
        let origin = HeaderValue::from_str(&config.frontend_url).map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "FRONTEND_URL".to_string(),
                value: config.frontend_url.clone(),
                reason: e.to_string(),
            }
        })?;
        AllowOrigin::exact(origin)
    } else {
        AllowOrigin::mirror_request()
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]))
}

/// Converts a caught handler panic into a 500 response.
fn panic_response(panic: Box<dyn Any + Send + 'static>, is_production: bool) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Request handler panicked: {}", detail);

    let error = if is_production {
        INTERNAL_SERVER_ERROR_MESSAGE.to_string()
    } else {
        detail
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { error })).into_response()
}
