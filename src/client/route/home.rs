use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "page-centered",
            div {
                class: "card card-centered",
                h1 { {SITE_NAME} }
                p { class: "muted", "Whitelist application" }
                match &*state {
                    AuthState::Initializing => rsx! {
                        span { class: "spinner" }
                    },
                    AuthState::Authenticated(user) => rsx! {
                        p { "Logged in as {user.username}" }
                        Link {
                            to: Route::Apply {},
                            class: "btn",
                            "Start application"
                        }
                    },
                    AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                        p { "Log in with Discord to apply." }
                        a {
                            href: "/login",
                            class: "btn btn-icon",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaDiscord
                            }
                            "Login with Discord"
                        }
                    },
                }
            }
        }
    }
}
