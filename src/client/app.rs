use dioxus::prelude::*;

use crate::client::{
    api::user::get_user,
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut auth_context = use_context_provider(AuthContext::new);

    // Check the session once on load
    let user = use_resource(get_user);
    use_effect(move || {
        if let Some(result) = &*user.read() {
            auth_context.set(AuthState::from(result.clone()));
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Whitelist application for {SITE_NAME}"
        }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
