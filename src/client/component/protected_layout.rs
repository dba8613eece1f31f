use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders the nested route only for logged-in users.
///
/// Sends anyone without a session back to the home page.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::NotLoggedIn) {
            nav.replace(Route::Home {});
        }
    });

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Authenticated(_) => rsx! {
                Outlet::<Route> {}
            },
            AuthState::Error(e) => rsx! {
                ErrorPage { status: e.status, message: e.message.clone() }
            },
            // Nothing to show while the session check runs or the redirect happens
            AuthState::Initializing | AuthState::NotLoggedIn => rsx! {
                LoadingPage {}
            },
        }
    }
}
