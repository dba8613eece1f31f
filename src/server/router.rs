use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::server::{
    controller::{
        application::submit_application,
        auth::{callback, login, logout},
        health::health,
        not_found,
        question::get_questions,
        user::get_user,
    },
    state::AppState,
};

/// Builds the application routes.
///
/// Paths that match no route are looked up in `static_dir`, which holds the built web
/// client. Anything not found there gets a JSON 404.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
        .route("/user", get(get_user))
        .route("/health", get(health))
        .route("/api/questions", get(get_questions))
        .route("/api/application", post(submit_application))
        .route_service("/apply", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(static_files)
}
